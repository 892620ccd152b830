//! Output formatting functionality
//!
//! Renderers for the package tree: JSON document, indented text tree and
//! flat CSV rows.

use ansi_term::Colour::{Blue, Cyan, Green, Purple, Yellow};
use ansi_term::Style;

use crate::error::{GotreeError, Result};
use crate::models::package::{Object, Package, PackageKind};
use crate::models::summary::ScanSummary;

/// Render the tree as pretty-printed JSON followed by a newline
pub fn format_tree_json(root: &Package) -> Result<String> {
    let mut out = serde_json::to_string_pretty(root)?;
    out.push('\n');
    Ok(out)
}

/// Declaration groups in the order they are listed for every package
fn declaration_groups(package: &Package) -> [(&'static str, &[Object]); 6] {
    [
        ("const", package.consts.as_slice()),
        ("var", package.vars.as_slice()),
        ("func", package.funcs.as_slice()),
        ("test", package.tests.as_slice()),
        ("interface", package.interfaces.as_slice()),
        ("alias", package.aliases.as_slice()),
    ]
}

fn kind_label(kind: PackageKind, use_colors: bool) -> String {
    let label = format!("({})", kind);
    if !use_colors {
        return label;
    }
    match kind {
        PackageKind::Package => Green.paint(label).to_string(),
        PackageKind::Command => Yellow.paint(label).to_string(),
        PackageKind::Test => Purple.paint(label).to_string(),
        PackageKind::Stub => Style::new().dimmed().paint(label).to_string(),
    }
}

fn object_line(indent: usize, kind: &str, object: &Object, use_colors: bool) -> String {
    let pad = "  ".repeat(indent);
    let text = if object.long_name.is_empty() {
        format!("{} {}", kind, object.name)
    } else {
        object.long_name.clone()
    };
    if use_colors {
        format!("{}{}  {}\n", pad, Cyan.paint(text), Style::new().dimmed().paint(&object.position))
    } else {
        format!("{}{}  {}\n", pad, text, object.position)
    }
}

/// Render the tree as an indented outline, declarations before child packages
pub fn format_tree_text(root: &Package, use_colors: bool) -> String {
    let mut output = String::new();
    write_package_text(&mut output, root, 0, use_colors);
    output
}

fn write_package_text(output: &mut String, package: &Package, indent: usize, use_colors: bool) {
    let pad = "  ".repeat(indent);
    let name = if use_colors {
        Blue.bold().paint(&package.name).to_string()
    } else {
        package.name.clone()
    };
    output.push_str(&format!("{}{} {}\n", pad, name, kind_label(package.kind, use_colors)));

    for (kind, objects) in declaration_groups(package) {
        for object in objects {
            output.push_str(&object_line(indent + 1, kind, object, use_colors));
        }
    }
    for ty in &package.types {
        output.push_str(&object_line(indent + 1, "type", &ty.object, use_colors));
        for method in &ty.methods {
            output.push_str(&object_line(indent + 2, "method", method, use_colors));
        }
    }

    for child in &package.packages {
        write_package_text(output, child, indent + 1, use_colors);
    }
}

/// Render the tree as CSV, one row per package and one per declaration
pub fn format_tree_csv(root: &Package) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["package_path", "package_kind", "decl_kind", "name", "long_name", "position"])?;
    write_package_csv(&mut writer, root, "")?;

    let bytes = writer
        .into_inner()
        .map_err(|e| GotreeError::from(csv::Error::from(e.into_error())))?;
    String::from_utf8(bytes).map_err(|e| GotreeError::CsvSerialize { source: e })
}

fn write_package_csv(writer: &mut csv::Writer<Vec<u8>>, package: &Package, parent: &str) -> Result<()> {
    let path = if parent.is_empty() {
        package.name.clone()
    } else {
        format!("{}/{}", parent, package.name)
    };
    let kind = package.kind.to_string();

    writer.write_record([path.as_str(), kind.as_str(), "package", package.name.as_str(), "", ""])?;
    for (decl_kind, objects) in declaration_groups(package) {
        for object in objects {
            write_object_csv(writer, &path, &kind, decl_kind, object)?;
        }
    }
    for ty in &package.types {
        write_object_csv(writer, &path, &kind, "type", &ty.object)?;
        for method in &ty.methods {
            write_object_csv(writer, &path, &kind, "method", method)?;
        }
    }

    for child in &package.packages {
        write_package_csv(writer, child, &path)?;
    }
    Ok(())
}

fn write_object_csv(
    writer: &mut csv::Writer<Vec<u8>>,
    path: &str,
    kind: &str,
    decl_kind: &str,
    object: &Object,
) -> Result<()> {
    writer.write_record([
        path,
        kind,
        decl_kind,
        object.name.as_str(),
        object.long_name.as_str(),
        object.position.as_str(),
    ])?;
    Ok(())
}

/// Render scan statistics for the verbose summary on stderr
pub fn format_summary_text(summary: &ScanSummary, use_colors: bool) -> String {
    let heading = if use_colors {
        Style::new().bold().paint("Scan Summary:").to_string()
    } else {
        "Scan Summary:".to_string()
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", heading));
    output.push_str(&format!("  Packages: {}\n", summary.packages));
    output.push_str(&format!("  Commands: {}\n", summary.commands));
    output.push_str(&format!("  Test packages: {}\n", summary.tests));
    output.push_str(&format!("  Stub directories: {}\n", summary.stubs));
    output.push_str(&format!("  Source files: {}\n", summary.source_files));
    output.push_str(&format!("  Declarations: {}\n", summary.declarations));
    output.push_str(&format!("  Deepest level: {}\n", summary.max_depth_reached));
    output.push_str(&format!("  Scan duration: {}\n", summary.format_duration()));
    output
}
