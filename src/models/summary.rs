//! Scan statistics derived from a finished package tree

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::package::{Package, PackageKind};

/// Counts gathered from a package tree after a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub packages: usize,
    pub commands: usize,
    pub tests: usize,
    pub stubs: usize,
    pub source_files: usize,
    pub declarations: usize,
    pub max_depth_reached: usize,
    #[serde(skip)]
    pub scan_duration: Duration,
}

impl ScanSummary {
    /// Tally a tree
    pub fn from_tree(root: &Package) -> Self {
        let mut summary = Self::default();
        root.walk(&mut |pkg, depth| {
            match pkg.kind {
                PackageKind::Package => summary.packages += 1,
                PackageKind::Command => summary.commands += 1,
                PackageKind::Test => summary.tests += 1,
                PackageKind::Stub => summary.stubs += 1,
            }
            summary.source_files += pkg.sources.len();
            summary.declarations += pkg.declaration_count();
            summary.max_depth_reached = summary.max_depth_reached.max(depth);
        });
        summary
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.scan_duration = duration;
        self
    }

    /// Format the scan duration in a human-readable way
    pub fn format_duration(&self) -> String {
        let millis = self.scan_duration.as_millis();
        if millis < 1000 {
            format!("{}ms", millis)
        } else {
            format!("{:.2}s", self.scan_duration.as_secs_f64())
        }
    }
}
