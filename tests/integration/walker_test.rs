use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};
use gotree::{
    core::Walker,
    error::GotreeError,
    models::config::Settings,
    output::{create_formatter, Formatter},
    Package, PackageKind, OutputFormat,
};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn settings(root: &Path, max_depth: usize) -> Settings {
    Settings {
        scan_path: root.to_path_buf(),
        max_depth,
        show_progress: false,
        ..Settings::default()
    }
}

fn scan(root: &Path, max_depth: usize) -> Package {
    Walker::new(settings(root, max_depth)).unwrap().scan().unwrap()
}

fn names(pkg: &Package) -> Vec<&str> {
    pkg.packages.iter().map(|p| p.name.as_str()).collect()
}

/// A module with a library root, two commands, a nested package with
/// external tests, and a few directories without Go code
fn create_module() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write(root, "store.go", "package store\n\nconst Version = \"1\"\n\ntype Store struct{}\n\nfunc (s *Store) Get(key string) (string, bool) { return \"\", false }\n\nfunc Open(path string) (*Store, error) { return nil, nil }\n");
    write(root, "store_ext_test.go", "package store_test\n\nimport \"testing\"\n\nfunc TestOpen(t *testing.T) {}\n");
    write(root, "cmd/storectl/main.go", "package main\n\nfunc main() {}\n");
    write(root, "cmd/stored/main.go", "package main\n\nvar addr = \":8080\"\n\nfunc main() {}\n");
    write(root, "internal/codec/codec.go", "package codec\n\ntype Codec interface { Encode(v any) ([]byte, error) }\n\ntype Bytes = []byte\n");
    write(root, "internal/codec/codec_test.go", "package codec_test\n\nimport \"testing\"\n\nfunc TestRoundTrip(t *testing.T) {}\n\nfunc helper() {}\n");
    write(root, "docs/README.md", "# docs\n");
    fs::create_dir_all(root.join("scripts/empty")).unwrap();
    dir
}

#[test]
fn test_round_trip_scenario() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.go", "package a\n\nfunc F() {}\n");
    write(dir.path(), "cmd/tool/main.go", "package main\n");

    let tree = scan(dir.path(), 3);

    assert_eq!(tree.kind, PackageKind::Package);
    assert_eq!(tree.name, "a");
    assert_eq!(tree.funcs.len(), 1);
    assert_eq!(tree.funcs[0].name, "F");
    assert_eq!(tree.funcs[0].position, "a.go:3:1");

    assert_eq!(names(&tree), vec!["cmd"]);
    let cmd = &tree.packages[0];
    assert_eq!(cmd.kind, PackageKind::Stub);
    assert_eq!(names(cmd), vec!["tool"]);
    let tool = &cmd.packages[0];
    assert_eq!(tool.kind, PackageKind::Command);
    assert!(tool.funcs.is_empty());
    assert!(tool.packages.is_empty());
}

#[test]
fn test_module_tree_shape() {
    let dir = create_module();
    let tree = scan(dir.path(), 3);

    assert_eq!(tree.name, "store");
    assert_eq!(names(&tree), vec!["cmd", "internal", "store_test"]);

    let cmd = &tree.packages[0];
    assert_eq!(names(cmd), vec!["storectl", "stored"]);
    assert!(cmd.packages.iter().all(|p| p.kind == PackageKind::Command));
    assert_eq!(cmd.packages[1].vars[0].name, "addr");

    let codec = &tree.packages[1].packages[0];
    assert_eq!(codec.name, "codec");
    assert_eq!(codec.interfaces[0].long_name, "type Codec interface");
    assert_eq!(codec.aliases[0].long_name, "type Bytes = []byte");
    assert_eq!(names(codec), vec!["codec_test"]);
    assert_eq!(codec.packages[0].tests[0].name, "TestRoundTrip");
    assert_eq!(codec.packages[0].funcs[0].name, "helper");

    let store_test = &tree.packages[2];
    assert_eq!(store_test.kind, PackageKind::Test);
    assert!(store_test.packages.is_empty());
    assert_eq!(store_test.tests[0].position, "store_ext_test.go:5:1");

    let store = &tree.types[0];
    assert_eq!(store.methods[0].long_name, "func (s *Store) Get(key string) (string, bool)");
    assert_eq!(tree.funcs[0].long_name, "func Open(path string) (*Store, error)");
}

#[test]
fn test_directories_without_go_code_are_omitted() {
    let dir = create_module();
    let tree = scan(dir.path(), 3);

    let mut all = Vec::new();
    tree.walk(&mut |pkg, _| all.push(pkg.name.clone()));
    assert!(!all.contains(&"docs".to_string()));
    assert!(!all.contains(&"scripts".to_string()));
    assert!(!all.contains(&"empty".to_string()));
}

#[test]
fn test_depth_cutoff() {
    let dir = create_module();

    let shallow = scan(dir.path(), 1);
    assert_eq!(shallow.name, "store");
    assert_eq!(names(&shallow), vec!["store_test"]);

    let two = scan(dir.path(), 2);
    assert_eq!(names(&two), vec!["store_test"]);

    let three = scan(dir.path(), 3);
    assert_eq!(names(&three), vec!["cmd", "internal", "store_test"]);
}

#[test]
fn test_depth_cutoff_leaves_no_stubs() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a/b/c/deep.go", "package deep\n");

    let tree = scan(dir.path(), 3);
    assert!(tree.is_stub());
    assert!(tree.packages.is_empty());

    let tree = scan(dir.path(), 4);
    assert_eq!(names(&tree), vec!["a"]);
    assert_eq!(tree.packages[0].packages[0].packages[0].name, "deep");
}

#[test]
fn test_test_only_directory_attaches_to_stub() {
    let dir = tempdir().unwrap();
    write(dir.path(), "lib.go", "package lib\n");
    write(dir.path(), "e2e/flow_test.go", "package e2e_test\n\nimport \"testing\"\n\nfunc TestFlow(t *testing.T) {}\n");

    let tree = scan(dir.path(), 3);
    assert_eq!(names(&tree), vec!["e2e"]);
    let e2e = &tree.packages[0];
    assert!(e2e.is_stub());
    assert_eq!(names(e2e), vec!["e2e_test"]);
}

#[test]
fn test_conflicting_packages_fail() {
    let dir = tempdir().unwrap();
    write(dir.path(), "pkg/a.go", "package alpha\n");
    write(dir.path(), "pkg/b.go", "package beta\n");

    let err = Walker::new(settings(dir.path(), 3)).unwrap().scan().unwrap_err();
    match &err {
        GotreeError::Conflict { path, first, second } => {
            assert_eq!(path, &dir.path().join("pkg"));
            assert_eq!(first, "alpha");
            assert_eq!(second, "beta");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_parse_error_names_file_and_position() {
    let dir = tempdir().unwrap();
    write(dir.path(), "ok.go", "package ok\n");
    write(dir.path(), "sub/broken.go", "package sub\n\nfunc Broken( {\n");

    let err = Walker::new(settings(dir.path(), 3)).unwrap().scan().unwrap_err();
    match &err {
        GotreeError::Parse { file, line, .. } => {
            assert_eq!(file, Path::new("sub/broken.go"));
            assert_eq!(*line, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("sub/broken.go:3:"));
}

#[test]
fn test_parse_error_below_cutoff_is_not_seen() {
    let dir = tempdir().unwrap();
    write(dir.path(), "ok.go", "package ok\n");
    write(dir.path(), "sub/broken.go", "package sub\n\nfunc Broken( {\n");

    let tree = scan(dir.path(), 1);
    assert_eq!(tree.name, "ok");
}

#[test]
fn test_idempotent_output() {
    let dir = create_module();
    let formatter = create_formatter(OutputFormat::Json, false);

    let first = formatter.format(&scan(dir.path(), 3)).unwrap();
    let second = formatter.format(&scan(dir.path(), 3)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = create_module();

    let mut sequential = settings(dir.path(), 3);
    sequential.parallel = false;
    let mut parallel = settings(dir.path(), 3);
    parallel.parallel = true;

    let a = Walker::new(sequential).unwrap().scan().unwrap();
    let b = Walker::new(parallel).unwrap().scan().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_exclude_by_relative_path() {
    let dir = create_module();
    let mut s = settings(dir.path(), 3);
    s.exclude_patterns = vec!["cmd/stored".to_string(), "internal*".to_string()];

    let tree = Walker::new(s).unwrap().scan().unwrap();
    assert_eq!(names(&tree), vec!["cmd", "store_test"]);
    assert_eq!(names(&tree.packages[0]), vec!["storectl"]);
}

#[test]
fn test_scan_tree_convenience() {
    let dir = create_module();
    let tree = gotree::scan_tree(dir.path(), 3).unwrap();
    assert_eq!(tree, scan(dir.path(), 3));
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_follow_setting() {
    let dir = tempdir().unwrap();
    let target = tempdir().unwrap();
    write(target.path(), "linked.go", "package linked\n");
    write(dir.path(), "root.go", "package root\n");
    std::os::unix::fs::symlink(target.path(), dir.path().join("link")).unwrap();

    let tree = scan(dir.path(), 3);
    assert!(tree.packages.is_empty());

    let mut s = settings(dir.path(), 3);
    s.follow_links = true;
    let tree = Walker::new(s).unwrap().scan().unwrap();
    assert_eq!(names(&tree), vec!["linked"]);
}
