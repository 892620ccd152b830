//! Error handling for gotree
//!
//! Error types, the result alias, and helpers for attaching paths to errors.

pub mod context;
pub mod types;

pub use context::{from_walkdir, ResultExt};
pub use types::{ErrorSeverity, GotreeError, Result};
