//! Shared helpers

pub mod paths;

pub use paths::{dir_name, list_dir, relative_display, DirListing};
