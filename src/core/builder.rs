//! Per-directory package assembly

use std::path::Path;

use crate::core::classifier::classify;
use crate::error::{GotreeError, Result};
use crate::models::ast::CompilationUnit;
use crate::models::package::{Package, PackageKind};

/// The packages found in one directory
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryPackages {
    /// The normal or command package, or a stub when the directory has neither
    pub node: Package,
    /// The external test package, if any
    pub test: Option<Package>,
}

impl DirectoryPackages {
    /// True when the directory holds any package content of its own
    pub fn has_content(&self) -> bool {
        !self.node.is_stub() || self.test.is_some()
    }
}

/// Decide what the compilation units of `dir` represent
///
/// `dir_name` names stubs and command packages. At most one normal or command
/// unit and at most one test unit may share a directory.
pub fn build_directory(dir: &Path, dir_name: &str, mut units: Vec<CompilationUnit>) -> Result<DirectoryPackages> {
    units.sort_by(|a, b| a.package.cmp(&b.package));

    let mut primary: Option<Package> = None;
    let mut test: Option<Package> = None;

    for unit in &units {
        let (slot, package) = if unit.is_test() {
            (&mut test, classify(unit, &unit.package, PackageKind::Test))
        } else if unit.is_command() {
            (&mut primary, classify(unit, dir_name, PackageKind::Command))
        } else {
            (&mut primary, classify(unit, &unit.package, PackageKind::Package))
        };

        if let Some(existing) = slot {
            return Err(GotreeError::Conflict {
                path: dir.to_path_buf(),
                first: declared_name(existing, &units),
                second: unit.package.clone(),
            });
        }
        *slot = Some(package);
    }

    Ok(DirectoryPackages {
        node: primary.unwrap_or_else(|| Package::stub(dir_name)),
        test,
    })
}

/// The declared identifier behind a classified package
fn declared_name(package: &Package, units: &[CompilationUnit]) -> String {
    match package.kind {
        PackageKind::Command => units
            .iter()
            .find(|u| u.is_command())
            .map(|u| u.package.clone())
            .unwrap_or_else(|| package.name.clone()),
        _ => package.name.clone(),
    }
}
