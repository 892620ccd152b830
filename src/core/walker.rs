//! Directory walking functionality
//!
//! Recursive descent over the scan root, bounded by the configured depth.
//! Each directory is parsed and assembled on its own; a directory without
//! package content is kept as a stub only when something below it is kept.

use glob::Pattern;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::core::builder::build_directory;
use crate::error::{GotreeError, Result};
use crate::models::config::Settings;
use crate::models::package::Package;
use crate::parsers::GoParser;
use crate::utils::paths::{dir_name, list_dir, relative_display};

/// Result of visiting one directory
struct Visit {
    package: Option<Package>,
    include: bool,
}

impl Visit {
    fn cut_off() -> Self {
        Self {
            package: None,
            include: false,
        }
    }
}

/// Main walker for directory traversal and package assembly
pub struct Walker {
    settings: Settings,
    parser: GoParser,
    exclude: Vec<Pattern>,
}

impl Walker {
    /// Create a new walker, compiling the exclude patterns up front
    pub fn new(settings: Settings) -> Result<Self> {
        let exclude = settings
            .exclude_patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            parser: GoParser::new()?,
            settings,
            exclude,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Scan the configured root and return the package tree
    pub fn scan(&self) -> Result<Package> {
        self.scan_with_progress(|_| {})
    }

    /// Scan the configured root, reporting each directory before it is parsed
    pub fn scan_with_progress<F>(&self, progress: F) -> Result<Package>
    where
        F: Fn(&Path) + Sync,
    {
        let root = self.settings.scan_path.as_path();
        if !root.is_dir() {
            return Err(GotreeError::InvalidPath {
                path: root.to_path_buf(),
            });
        }

        tracing::info!(root = %root.display(), max_depth = self.settings.max_depth, parallel = self.settings.parallel, "scanning");
        let visit = self.visit(root, root, 0, &progress)?;
        visit.package.ok_or_else(|| GotreeError::config_error("max_depth must be at least 1"))
    }

    fn visit<F>(&self, dir: &Path, root: &Path, depth: usize, progress: &F) -> Result<Visit>
    where
        F: Fn(&Path) + Sync,
    {
        if depth >= self.settings.max_depth {
            return Ok(Visit::cut_off());
        }

        progress(dir);
        let listing = list_dir(dir, self.settings.follow_links)?;
        let units = self.parser.parse_files(&listing.files, root)?;
        let built = build_directory(dir, &dir_name(dir), units)?;
        let mut include = built.has_content();
        let mut node = built.node;

        tracing::debug!(
            dir = %dir.display(),
            depth,
            kind = %node.kind,
            files = listing.files.len(),
            subdirs = listing.dirs.len(),
            "visited directory"
        );

        let subdirs: Vec<&PathBuf> = listing.dirs.iter().filter(|d| !self.is_excluded(d, root)).collect();
        let children: Vec<Visit> = if self.settings.parallel {
            subdirs
                .par_iter()
                .map(|sub| self.visit(sub, root, depth + 1, progress))
                .collect::<Vec<_>>()
                .into_iter()
                .collect::<Result<Vec<_>>>()?
        } else {
            subdirs
                .iter()
                .map(|sub| self.visit(sub, root, depth + 1, progress))
                .collect::<Result<Vec<_>>>()?
        };

        for child in children {
            if !child.include {
                continue;
            }
            if let Some(package) = child.package {
                node.packages.push(package);
                include = true;
            }
        }

        if let Some(test) = built.test {
            node.packages.push(test);
        }

        Ok(Visit {
            package: Some(node),
            include,
        })
    }

    /// Excluded when a pattern matches the directory name or its path below the root
    fn is_excluded(&self, dir: &Path, root: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let relative = relative_display(dir, root);
        let name = dir.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let excluded = self.exclude.iter().any(|p| p.matches(&name) || p.matches(&relative));
        if excluded {
            tracing::debug!(dir = %dir.display(), "excluded");
        }
        excluded
    }
}
