//! MS Hexa widget core
//!
//! Platform-free logic behind the companion widgets:
//! - number / chinese: input parsing and display formatting
//! - conversion: rate / NTD / Mesos mutual derivation
//! - timer: burning-level countdown
//! - domain: remote documents (history records, to-do items)
//! - delta: per-row history differences
//! - live_list: snapshot synchronization and list mutations

pub mod chinese;
pub mod config;
pub mod conversion;
pub mod delta;
pub mod domain;
pub mod error;
pub mod live_list;
pub mod number;
pub mod timer;

pub use config::AppConfig;
pub use error::{StoreError, StoreResult, ValidationError};
