//! Validation of fully merged settings

use std::path::Path;

use crate::error::{GotreeError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.scan_path.is_dir() {
            return Err(GotreeError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        if settings.max_depth == 0 {
            return Err(GotreeError::config_error("max_depth must be at least 1"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(GotreeError::InvalidPath {
                path: parent.to_path_buf(),
            }),
            _ => Ok(()),
        }
    }
}
