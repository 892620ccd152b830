use std::fs;
use std::path::Path;
use tempfile::tempdir;
use gotree::{
    core::Walker,
    models::config::Settings,
    output::{create_formatter, create_writer},
    OutputFormat, Package,
};

fn sample_tree(root: &Path) -> Package {
    fs::write(
        root.join("shapes.go"),
        "package shapes\n\nconst (\n\tMaxSides = 12\n\tMinSides int = 3\n)\n\nvar Registry map[string]Shape\n\ntype Shape interface{ Area() float64 }\n\ntype Square struct{ Side float64 }\n\nfunc (s Square) Area() float64 { return s.Side * s.Side }\n\nfunc (s *Square) Scale(by float64) { s.Side *= by }\n\nfunc Sum(shapes ...Shape) float64 { return 0 }\n\nfunc Watch(ch <-chan Shape) {}\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("cmd/draw")).unwrap();
    fs::write(root.join("cmd/draw/main.go"), "package main\n\nfunc main() {}\n").unwrap();

    let settings = Settings {
        scan_path: root.to_path_buf(),
        show_progress: false,
        ..Settings::default()
    };
    Walker::new(settings).unwrap().scan().unwrap()
}

#[test]
fn test_json_document() {
    let dir = tempdir().unwrap();
    let tree = sample_tree(dir.path());
    let output = create_formatter(OutputFormat::Json, false).format(&tree).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["name"], "shapes");
    assert_eq!(value["kind"], "package");
    assert_eq!(value["consts"][0]["longName"], "const MaxSides");
    assert_eq!(value["consts"][1]["longName"], "const MinSides int");
    assert_eq!(value["vars"][0]["longName"], "var Registry map[string]Shape");
    assert_eq!(value["interfaces"][0]["name"], "Shape");
    assert_eq!(value["types"][0]["name"], "Square");
    assert_eq!(value["types"][0]["methods"][0]["longName"], "func (s Square) Area() float64");
    assert_eq!(value["types"][0]["methods"][1]["longName"], "func (s *Square) Scale(by float64)");
    assert_eq!(value["funcs"][0]["longName"], "func Sum(shapes ...Shape) float64");
    assert_eq!(value["funcs"][1]["longName"], "Watch");
    assert_eq!(value["sources"], serde_json::json!(["shapes.go"]));

    let draw = &value["packages"][0]["packages"][0];
    assert_eq!(draw["name"], "draw");
    assert_eq!(draw["kind"], "command");
    assert!(draw.get("packages").is_none());
    assert!(value.get("aliases").is_none());
    assert!(value.get("tests").is_none());
}

#[test]
fn test_text_and_csv_outputs() {
    let dir = tempdir().unwrap();
    let tree = sample_tree(dir.path());

    let text = create_formatter(OutputFormat::Text, false).format(&tree).unwrap();
    assert!(text.starts_with("shapes (package)\n"));
    assert!(text.contains("\n  cmd (stub)\n    draw (command)\n"));

    let csv = create_formatter(OutputFormat::Csv, false).format(&tree).unwrap();
    assert!(csv.contains("shapes,package,method,Scale,func (s *Square) Scale(by float64),shapes.go:16:1"));
    assert!(csv.contains("shapes/cmd/draw,command,package,draw,,"));
}

#[test]
fn test_write_to_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    let tree = sample_tree(&src);

    let out = dir.path().join("tree.json");
    let rendered = create_formatter(OutputFormat::Json, false).format(&tree).unwrap();
    create_writer(Some(&out)).write(&rendered).unwrap();

    let parsed: Package = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed, tree);
}
