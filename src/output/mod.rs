//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::format_summary_text;
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::package::Package;

/// Trait for different output formatters
pub trait Formatter {
    /// Render a package tree into a string
    fn format(&self, root: &Package) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
}

impl TextFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, root: &Package) -> Result<String> {
        Ok(formatters::format_tree_text(root, self.use_colors))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, root: &Package) -> Result<String> {
        formatters::format_tree_json(root)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, root: &Package) -> Result<String> {
        formatters::format_tree_csv(root)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors)),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
