//! Error context utilities for gotree

use std::path::Path;

use crate::error::{GotreeError, Result};

/// Extension trait for IO results to attach the path being worked on
pub trait ResultExt<T> {
    /// Attach a path to an IO error, mapping permission denial to its own variant
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::io::Result<T> {
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            if err.kind() == std::io::ErrorKind::PermissionDenied {
                GotreeError::permission_denied(path.as_ref())
            } else {
                GotreeError::io_error(path.as_ref(), err)
            }
        })
    }
}

/// Convert a `walkdir` error into a gotree error for the entry that failed
pub fn from_walkdir(err: walkdir::Error, fallback: &Path) -> GotreeError {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    if err.loop_ancestor().is_some() {
        return GotreeError::directory_traversal_error(path, "symbolic link loop detected");
    }
    match err.into_io_error() {
        Some(io_err) if io_err.kind() == std::io::ErrorKind::PermissionDenied => GotreeError::permission_denied(path),
        Some(io_err) => GotreeError::io_error(path, io_err),
        None => GotreeError::directory_traversal_error(path, "failed to read directory entry"),
    }
}
