//! Error types and definitions for gotree
//!
//! Every scan failure is fatal: a parse error, an unreadable directory or an
//! ambiguous package directory aborts the whole walk and surfaces here.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels, used to pick the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The scan failed on its input (bad source, unreadable directory)
    Error,
    /// The tool itself could not run (bad configuration, unwritable output)
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for gotree operations
#[derive(Debug, Error)]
pub enum GotreeError {
    /// Syntax error in a Go source file
    #[error("{file}:{line}:{column}: {message}")]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// IO errors tied to a path
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Two compilation units compete for the same directory
    #[error("Conflicting packages in {path}: {first} and {second}")]
    Conflict {
        path: PathBuf,
        first: String,
        second: String,
    },

    /// Directory traversal errors that are not plain IO failures
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// The Go grammar could not be loaded into the parser
    #[error("Failed to load Go grammar: {message}")]
    Language { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV output was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl GotreeError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GotreeError::Language { .. } => ErrorSeverity::Critical,
            GotreeError::Config { .. } => ErrorSeverity::Critical,
            GotreeError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            GotreeError::ConfigRead { .. } => ErrorSeverity::Critical,
            GotreeError::ConfigParse { .. } => ErrorSeverity::Critical,
            GotreeError::GlobPattern { .. } => ErrorSeverity::Critical,
            GotreeError::OutputWrite { .. } => ErrorSeverity::Critical,
            GotreeError::StdoutWrite { .. } => ErrorSeverity::Critical,
            GotreeError::JsonSerialize { .. } => ErrorSeverity::Critical,
            GotreeError::Csv { .. } => ErrorSeverity::Critical,
            GotreeError::CsvSerialize { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Error => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    /// The path this error is about, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            GotreeError::Parse { file, .. } => Some(file),
            GotreeError::Io { path, .. }
            | GotreeError::PermissionDenied { path }
            | GotreeError::Conflict { path, .. }
            | GotreeError::DirectoryTraversal { path, .. }
            | GotreeError::InvalidPath { path }
            | GotreeError::ConfigNotFound { path }
            | GotreeError::ConfigRead { path, .. }
            | GotreeError::ConfigParse { path, .. }
            | GotreeError::OutputWrite { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            GotreeError::Parse { file, line, column, message } => {
                format!("Syntax error in '{}' at line {}, column {}: {}", file.display(), line, column, message)
            }
            GotreeError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied.", path.display())
            }
            GotreeError::Io { path, source } => {
                format!("File system error at '{}': {}", path.display(), source)
            }
            GotreeError::Conflict { path, first, second } => {
                format!(
                    "Directory '{}' declares two packages, '{}' and '{}'. A directory may hold one package plus its external test package.",
                    path.display(),
                    first,
                    second
                )
            }
            GotreeError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            GotreeError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// A hint on how to recover from this error, if there is an obvious one
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            GotreeError::InvalidPath { .. } => Some("Check that the path exists and is a directory"),
            GotreeError::PermissionDenied { .. } => Some("Check file permissions, or exclude the directory with --exclude"),
            GotreeError::Conflict { .. } => Some("Move one of the packages into its own directory, or exclude the directory with --exclude"),
            GotreeError::ConfigNotFound { .. } => Some("Create one with --init or pass an existing file with --config"),
            GotreeError::Parse { .. } => Some("Fix the syntax error, or exclude the directory with --exclude"),
            _ => None,
        }
    }

    /// Create an IO error for a path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GotreeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse_error(file: impl Into<PathBuf>, line: usize, column: usize, message: impl Into<String>) -> Self {
        GotreeError::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        GotreeError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        GotreeError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        GotreeError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<glob::PatternError> for GotreeError {
    fn from(err: glob::PatternError) -> Self {
        GotreeError::GlobPattern { source: err }
    }
}

impl From<csv::Error> for GotreeError {
    fn from(err: csv::Error) -> Self {
        GotreeError::Csv { source: err }
    }
}

impl From<serde_json::Error> for GotreeError {
    fn from(err: serde_json::Error) -> Self {
        GotreeError::JsonSerialize { source: err }
    }
}

/// Result type alias for gotree operations
pub type Result<T> = std::result::Result<T, GotreeError>;
