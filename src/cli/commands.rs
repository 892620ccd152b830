//! Command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::Walker;
use crate::error::{GotreeError, Result};
use crate::models::config::Settings;
use crate::models::package::Package;
use crate::models::summary::ScanSummary;
use crate::output::{create_formatter, create_progress_callback, create_writer, format_summary_text, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Scan a source tree and print the package tree
    Scan(Args),
    /// Write a default configuration file to the current directory
    Init,
}

/// What a finished scan produced
#[derive(Debug)]
pub struct ScanReport {
    pub tree: Package,
    pub summary: ScanSummary,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            Command::Init
        } else {
            Command::Scan(args)
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Init => init_config(Path::new(DEFAULT_CONFIG_FILE)),
            Command::Scan(args) => {
                self.validate()?;
                let settings = config::load_config(CliArgs::from(args))?;
                tracing::debug!(?settings, "resolved settings");

                let report = scan(&settings)?;
                let rendered = create_formatter(settings.output_format, settings.use_colors).format(&report.tree)?;
                create_writer(settings.output_file.as_ref()).write(&rendered)?;

                if settings.verbose {
                    eprint!("{}", format_summary_text(&report.summary, settings.use_colors));
                }
                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Scan(args) => {
                if let Some(path) = &args.path {
                    if !path.exists() {
                        return Err(GotreeError::InvalidPath { path: path.clone() });
                    }
                }
                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(GotreeError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }
                if args.depth == Some(0) {
                    return Err(GotreeError::config_error("--depth must be at least 1"));
                }
                Ok(())
            }
            Command::Init => Ok(()),
        }
    }
}

/// Scan with the given settings, showing a spinner when enabled
pub fn scan(settings: &Settings) -> Result<ScanReport> {
    let start_time = Instant::now();
    let walker = Walker::new(settings.clone())?;

    let reporter = Arc::new(ProgressReporter::new(settings.show_progress && !settings.quiet));
    let result = walker.scan_with_progress(create_progress_callback(reporter.clone()));
    reporter.finish();
    let tree = result?;

    let summary = ScanSummary::from_tree(&tree).with_duration(start_time.elapsed());
    tracing::info!(
        packages = summary.packages,
        commands = summary.commands,
        tests = summary.tests,
        directories = reporter.directories_seen(),
        duration = %summary.format_duration(),
        "scan finished"
    );
    Ok(ScanReport { tree, summary })
}

/// Write a default configuration file unless one already exists
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        eprintln!("Configuration file already exists at: {}", path.display());
        eprintln!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(path)?;
    eprintln!("Created default configuration file at: {}", display_path(path).display());
    Ok(())
}

fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
