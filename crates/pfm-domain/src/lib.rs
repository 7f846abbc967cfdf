//! pfm-domain
//!
//! Pure domain models for the finance tracker (Transaction, Category, drafts, filters).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod draft;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use draft::*;
pub use transaction::*;
