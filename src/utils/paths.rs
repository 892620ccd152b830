//! Path and directory listing helpers

use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{from_walkdir, Result};

/// Immediate children of a directory, sorted by file name
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirListing {
    /// Go source files
    pub files: Vec<PathBuf>,
    /// Subdirectories
    pub dirs: Vec<PathBuf>,
}

/// List the Go files and subdirectories directly inside `dir`
///
/// Symbolic links to directories are only listed when `follow_links` is set.
pub fn list_dir(dir: &Path, follow_links: bool) -> Result<DirListing> {
    let mut listing = DirListing::default();
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(follow_links)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.map_err(|err| from_walkdir(err, dir))?;
        let file_type = entry.file_type();
        if file_type.is_dir() {
            listing.dirs.push(entry.into_path());
        } else if is_go_source(entry.path()) && (file_type.is_file() || entry.path().is_file()) {
            listing.files.push(entry.into_path());
        }
    }

    Ok(listing)
}

/// True for `*.go` file names
pub fn is_go_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// `path` relative to `root`, with `/` separators
pub fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

/// Base name of a directory, resolving `.` and `..` against the working directory
pub fn dir_name(path: &Path) -> String {
    if let Some(name) = std::path::absolute(path).ok().and_then(|abs| abs.file_name().map(|n| n.to_owned())) {
        return name.to_string_lossy().into_owned();
    }
    if let Some(name) = fs::canonicalize(path).ok().and_then(|abs| abs.file_name().map(|n| n.to_owned())) {
        return name.to_string_lossy().into_owned();
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_dir_sorts_and_filters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("z.go"), "package z\n").unwrap();
        fs::write(dir.path().join("a.go"), "package z\n").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::create_dir(dir.path().join("cmd")).unwrap();

        let listing = list_dir(dir.path(), false).unwrap();
        let files: Vec<_> = listing.files.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        let dirs: Vec<_> = listing.dirs.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        assert_eq!(files, vec!["a.go", "z.go"]);
        assert_eq!(dirs, vec!["cmd", "pkg"]);
    }

    #[test]
    fn test_list_dir_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_dir(&missing, false).is_err());
    }

    #[test]
    fn test_relative_display() {
        let root = Path::new("/src/project");
        assert_eq!(relative_display(Path::new("/src/project/cmd/tool/main.go"), root), "cmd/tool/main.go");
        assert_eq!(relative_display(Path::new("/src/project/a.go"), root), "a.go");
        assert_eq!(relative_display(Path::new("/elsewhere/b.go"), root), "/elsewhere/b.go");
    }

    #[test]
    fn test_dir_name() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("widgets");
        fs::create_dir(&nested).unwrap();
        assert_eq!(dir_name(&nested), "widgets");
        assert_eq!(dir_name(&nested.join("..").join("widgets")), "widgets");
    }
}
