//! Domain Layer
//!
//! Documents held in the remote collections.

mod document;
mod record;
mod todo;

pub use document::{Document, NoPatch, StoredDocument};
pub use record::{NewRecord, Record};
pub use todo::{NewTodo, TodoItem, TodoPatch, TodoRow, TodoView};
