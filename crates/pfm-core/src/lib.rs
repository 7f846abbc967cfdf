//! pfm-core
//!
//! The ledger store and its derived read views.
//! Depends on pfm-domain. No CLI, no terminal I/O, no filesystem access;
//! persistence goes through the [`storage::KeyValueStorage`] seam.

pub mod chart_service;
pub mod error;
pub mod ledger_store;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use chart_service::*;
pub use error::CoreError;
pub use ledger_store::*;
pub use storage::{KeyValueStorage, MemoryStorage, STORAGE_KEY};
pub use summary_service::*;
pub use time::{Clock, FixedClock, SystemClock};
