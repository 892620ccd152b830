//! End-to-end tests running the gotree binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn gotree(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gotree"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("GOTREE_SCAN_PATH")
        .env_remove("GOTREE_EXCLUDE")
        .env_remove("GOTREE_MAX_DEPTH")
        .env_remove("GOTREE_OUTPUT_FORMAT")
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .output()
        .unwrap()
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_scan_prints_json_tree() {
    let dir = tempdir().unwrap();
    write(dir.path(), "src/a.go", "package a\n\nfunc F() {}\n");
    write(dir.path(), "src/cmd/tool/main.go", "package main\n");

    let output = gotree(&["src", "--no-progress"], dir.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "a");
    assert_eq!(value["kind"], "package");
    assert_eq!(value["funcs"][0]["position"], "a.go:3:1");
    assert_eq!(value["packages"][0]["name"], "cmd");
    assert_eq!(value["packages"][0]["kind"], "stub");
    assert_eq!(value["packages"][0]["packages"][0]["name"], "tool");
    assert_eq!(value["packages"][0]["packages"][0]["kind"], "command");
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let dir = tempdir().unwrap();
    write(dir.path(), "m/lib.go", "package lib\n\ntype T struct{}\n\nfunc (t T) M() {}\n");
    write(dir.path(), "m/x/y/z.go", "package z\n");

    let first = gotree(&["m", "--no-progress"], dir.path());
    let second = gotree(&["m", "--no-progress", "--no-parallel"], dir.path());
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_parse_error_exits_non_zero() {
    let dir = tempdir().unwrap();
    write(dir.path(), "m/bad/bad.go", "package bad\n\nvar = \n");

    let output = gotree(&["m", "--no-progress"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad/bad.go"), "stderr: {stderr}");
}

#[test]
fn test_missing_path_exits_non_zero() {
    let dir = tempdir().unwrap();
    let output = gotree(&["does-not-exist"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist"));
}

#[test]
fn test_depth_flag() {
    let dir = tempdir().unwrap();
    write(dir.path(), "m/root.go", "package root\n");
    write(dir.path(), "m/sub/sub.go", "package sub\n");

    let output = gotree(&["m", "--depth", "1", "--no-progress"], dir.path());
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("packages").is_none());
}

#[test]
fn test_init_then_config_file_is_used() {
    let dir = tempdir().unwrap();
    write(dir.path(), "m/root.go", "package root\n");
    write(dir.path(), "m/vendor/dep/dep.go", "package dep\n");

    let init = gotree(&["--init"], dir.path());
    assert!(init.status.success());
    assert!(dir.path().join(".gotree.toml").is_file());

    let output = gotree(&["m", "--output", "text", "--no-colors", "--no-progress"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "root (package)\n");
}

#[test]
fn test_output_file_and_csv() {
    let dir = tempdir().unwrap();
    write(dir.path(), "m/root.go", "package root\n\nvar X int\n");

    let output = gotree(&["m", "--output", "csv", "--output-file", "out.csv", "-q"], dir.path());
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert!(csv.starts_with("package_path,package_kind,decl_kind,name,long_name,position\n"));
    assert!(csv.contains("root,package,var,X,var X int,root.go:3:5\n"));
}
