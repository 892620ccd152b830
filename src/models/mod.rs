//! Data models and structures for gotree

pub mod ast;
pub mod config;
pub mod package;
pub mod summary;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use package::{Object, Package, PackageKind, Type};
pub use summary::ScanSummary;
