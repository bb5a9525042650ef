//! Frontend Data Models
//!
//! Wire models live in `mshexa-core`; re-exported here for components.

pub use mshexa_core::delta::HistoryView;
pub use mshexa_core::domain::{NewRecord, NewTodo, Record, TodoItem, TodoView};
