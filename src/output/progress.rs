//! Progress reporting functionality
//!
//! A spinner on stderr naming the directory being scanned. Disabled reporters
//! do nothing, so callers never branch on quiet mode themselves.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Progress reporter for a scan
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; `enabled = false` yields a silent one
    pub fn new(enabled: bool) -> Self {
        let spinner = enabled.then(|| {
            let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed}] {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });
        Self { spinner }
    }

    /// Show the directory currently being scanned
    pub fn directory(&self, dir: &Path) {
        if let Some(spinner) = &self.spinner {
            spinner.inc(1);
            spinner.set_message(format!("scanning {}", dir.display()));
        }
    }

    /// Number of directories reported so far
    pub fn directories_seen(&self) -> u64 {
        self.spinner.as_ref().map_or(0, |s| s.position())
    }

    /// Clear the spinner so it does not interleave with the output
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.spinner.is_some()
    }
}

/// Create a progress callback for [`crate::core::Walker::scan_with_progress`]
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(&Path) + Send + Sync {
    move |dir: &Path| reporter.directory(dir)
}
