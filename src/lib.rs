//! gotree - a Go source tree package scanner
//!
//! Walks a directory hierarchy of Go sources, parses each directory as a
//! compilation unit and assembles the packages, commands, test packages and
//! connecting stub directories into one serializable tree.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

use std::path::Path;

pub use crate::core::Walker;
pub use error::{ErrorSeverity, GotreeError, Result, ResultExt};
pub use models::{
    config::{OutputFormat, Settings},
    package::{Object, Package, PackageKind, Type},
    summary::ScanSummary,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Scan `path` down to `max_depth` directory levels with default settings
pub fn scan_tree(path: impl AsRef<Path>, max_depth: usize) -> Result<Package> {
    let settings = Settings {
        scan_path: path.as_ref().to_path_buf(),
        max_depth,
        ..Settings::default()
    };
    Walker::new(settings)?.scan()
}
