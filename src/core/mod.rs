//! Core functionality for directory walking and package assembly

pub mod builder;
pub mod classifier;
pub mod signature;
pub mod walker;

pub use builder::{build_directory, DirectoryPackages};
pub use classifier::classify;
pub use walker::Walker;
