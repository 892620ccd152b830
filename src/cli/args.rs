//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// gotree - Go source tree package scanner
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gotree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a Go source tree and print its packages and declarations")]
#[command(long_about = "gotree walks a directory hierarchy of Go sources, parses each directory as a compilation unit, \
classifies it as a package, command, test package or stub directory, and prints the resulting tree \
of packages with their constants, variables, functions, tests, types, methods, interfaces and aliases.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Scan the current directory
    gotree

    # Scan a specific module
    gotree ./my-module

    # Look five directory levels deep instead of three
    gotree ./my-module --depth 5

    # Skip vendored code and generated protobuf packages
    gotree --exclude vendor --exclude 'internal/pb*'

Output Options:
    # Indented tree for the terminal
    gotree --output text

    # One row per declaration for spreadsheets
    gotree --output csv --output-file decls.csv

Configuration:
    # Use a specific configuration file
    gotree --config ./gotree.toml

    # Create a default configuration file
    gotree --init

Verbosity:
    # Only print the result
    gotree --quiet

    # Print debug logs and a scan summary on stderr
    gotree --verbose
")]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "PATH", help = "Root directory to scan (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Number of directory levels to visit
    #[arg(short, long, value_name = "DEPTH", help = "Number of directory levels to visit, the root being level 1 (default: 3)")]
    pub depth: Option<usize>,

    /// Exclude directories matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob pattern for directories to skip, matched against the directory name and its path below the root (repeatable)")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, help = "Output format: 'json' (default), 'text' for a terminal tree, 'csv' for one row per declaration")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Disable parallel processing
    #[arg(long, help = "Scan sibling directories one at a time on the current thread")]
    pub no_parallel: bool,

    /// Follow symbolic links to directories
    #[arg(long, help = "Descend into symbolic links to directories (cycles are reported as errors)")]
    pub follow_links: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored text output")]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner on stderr")]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to a configuration file (defaults to .gotree.toml in the current directory, then the home directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.gotree.toml) in the current directory")]
    pub init: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose", help = "Only print the result; no progress, only errors on stderr")]
    pub quiet: bool,

    /// Show debug logs and a scan summary
    #[arg(short, long, help = "Print debug logs and a scan summary on stderr")]
    pub verbose: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON document
    Json,
    /// Indented tree
    Text,
    /// One row per declaration
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
