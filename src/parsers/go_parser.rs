//! Go source parser using tree-sitter
//!
//! Each file is parsed into a concrete syntax tree and lowered right away into
//! the declaration AST in [`crate::models::ast`]. Syntax errors abort with the
//! location of the first broken node.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser};

use crate::error::{GotreeError, Result, ResultExt};
use crate::models::ast::{
    CompilationUnit, Decl, FuncDecl, Param, Position, Receiver, Results, SourceFile, TypeExpr, TypeShape, TypeSpec,
    ValueKind, ValueSpec,
};
use crate::utils::paths::{list_dir, relative_display};

/// Thread-safe parser pool for reuse across directories
pub struct ParserPool {
    parsers: Mutex<Vec<Parser>>,
}

impl ParserPool {
    /// Create a pool holding `size` ready parsers
    pub fn new(size: usize) -> Result<Self> {
        let mut parsers = Vec::with_capacity(size);
        for _ in 0..size {
            parsers.push(new_go_parser()?);
        }
        Ok(Self {
            parsers: Mutex::new(parsers),
        })
    }

    /// Take a parser from the pool, creating one if the pool is drained
    pub fn take(&self) -> Result<Parser> {
        match self.parsers.lock().pop() {
            Some(parser) => Ok(parser),
            None => new_go_parser(),
        }
    }

    /// Return a parser to the pool
    pub fn return_parser(&self, parser: Parser) {
        self.parsers.lock().push(parser);
    }
}

fn new_go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| GotreeError::Language { message: e.to_string() })?;
    Ok(parser)
}

/// Go parser producing declaration-level syntax trees
pub struct GoParser {
    pool: ParserPool,
}

impl GoParser {
    /// Create a new parser with one pooled instance per CPU
    pub fn new() -> Result<Self> {
        Ok(Self {
            pool: ParserPool::new(num_cpus::get())?,
        })
    }

    /// Parse every `.go` file directly inside `dir`, grouped by package identifier
    pub fn parse_dir(&self, dir: &Path, root: &Path) -> Result<Vec<CompilationUnit>> {
        let listing = list_dir(dir, false)?;
        self.parse_files(&listing.files, root)
    }

    /// Parse the given files and group them into compilation units
    ///
    /// Units come back ordered by package identifier, files by name.
    pub fn parse_files(&self, files: &[PathBuf], root: &Path) -> Result<Vec<CompilationUnit>> {
        let mut units: BTreeMap<String, Vec<SourceFile>> = BTreeMap::new();
        for path in files {
            let file = self.parse_file(path, &relative_display(path, root))?;
            units.entry(file.package.clone()).or_default().push(file);
        }

        Ok(units
            .into_iter()
            .map(|(package, mut files)| {
                files.sort_by(|a, b| a.name.cmp(&b.name));
                CompilationUnit { package, files }
            })
            .collect())
    }

    /// Read and parse one file; `display` is the path used in positions
    pub fn parse_file(&self, path: &Path, display: &str) -> Result<SourceFile> {
        tracing::trace!(file = %path.display(), "parsing");
        let bytes = fs::read(path).with_path(path)?;
        let source = decode_source(bytes, display)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.to_string());
        self.parse_source(&name, display, &source)
    }

    /// Parse source text that is already in memory
    pub fn parse_source(&self, name: &str, display: &str, source: &str) -> Result<SourceFile> {
        let mut parser = self.pool.take()?;
        let tree = parser.parse(source, None);
        self.pool.return_parser(parser);

        let tree = tree.ok_or_else(|| GotreeError::parse_error(display, 1, 1, "parser produced no syntax tree"))?;
        let lowering = Lowering { source, file: display };
        lowering.file(name, tree.root_node())
    }
}

/// Source text must be UTF-8; the first invalid byte is reported as a syntax error
fn decode_source(bytes: Vec<u8>, display: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|err| {
        let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = match valid.iter().rposition(|&b| b == b'\n') {
            Some(newline) => valid.len() - newline,
            None => valid.len() + 1,
        };
        GotreeError::parse_error(display, line, column, "illegal UTF-8 encoding")
    })
}

/// Walks one file's syntax tree and builds the declaration AST
struct Lowering<'a> {
    source: &'a str,
    file: &'a str,
}

impl<'a> Lowering<'a> {
    fn file(&self, name: &str, root: Node) -> Result<SourceFile> {
        if root.has_error() {
            let node = first_error(root).unwrap_or(root);
            return Err(self.syntax_error(node));
        }

        let mut package = None;
        let mut decls = Vec::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_clause" => {
                    package = first_named(child).map(|ident| self.text(ident).to_string());
                }
                "const_declaration" => {
                    for spec in specs(child, "const_spec") {
                        decls.push(Decl::Value(self.value_spec(spec, ValueKind::Const)));
                    }
                }
                "var_declaration" => {
                    for spec in specs(child, "var_spec") {
                        decls.push(Decl::Value(self.value_spec(spec, ValueKind::Var)));
                    }
                }
                "type_declaration" => {
                    let mut type_cursor = child.walk();
                    for spec in child.named_children(&mut type_cursor) {
                        if let Some(decl) = self.type_spec(spec) {
                            decls.push(Decl::Type(decl));
                        }
                    }
                }
                "function_declaration" | "method_declaration" => {
                    if let Some(func) = self.func_decl(child) {
                        decls.push(Decl::Func(func));
                    }
                }
                _ => {}
            }
        }

        let package = package.ok_or_else(|| GotreeError::parse_error(self.file, 1, 1, "expected 'package' clause"))?;
        Ok(SourceFile {
            name: name.to_string(),
            package,
            decls,
        })
    }

    fn value_spec(&self, node: Node, kind: ValueKind) -> ValueSpec {
        let mut cursor = node.walk();
        let names = node
            .children_by_field_name("name", &mut cursor)
            .filter(|n| n.is_named())
            .map(|n| self.text(n).to_string())
            .collect();
        ValueSpec {
            kind,
            names,
            ty: node.child_by_field_name("type").map(|t| self.type_expr(t)),
            position: self.position(node),
        }
    }

    fn type_spec(&self, node: Node) -> Option<TypeSpec> {
        let name = self.text(node.child_by_field_name("name")?).to_string();
        let ty = node.child_by_field_name("type")?;
        let shape = match node.kind() {
            "type_alias" => TypeShape::Alias(self.type_expr(ty)),
            "type_spec" if ty.kind() == "interface_type" => TypeShape::Interface,
            "type_spec" => TypeShape::Other(self.type_expr(ty)),
            _ => return None,
        };
        Some(TypeSpec {
            name,
            shape,
            position: self.position(node),
        })
    }

    fn func_decl(&self, node: Node) -> Option<FuncDecl> {
        let name = self.text(node.child_by_field_name("name")?).to_string();
        let receiver = node
            .child_by_field_name("receiver")
            .and_then(|list| self.params(list).into_iter().next())
            .map(|param| Receiver {
                name: param.names.into_iter().next(),
                ty: param.ty,
            });
        let params = node
            .child_by_field_name("parameters")
            .map(|list| self.params(list))
            .unwrap_or_default();
        let results = node.child_by_field_name("result").map(|result| {
            if result.kind() == "parameter_list" {
                Results::List(self.params(result))
            } else {
                Results::Single(self.type_expr(result))
            }
        });
        Some(FuncDecl {
            name,
            receiver,
            params,
            results,
            position: self.position(node),
        })
    }

    fn params(&self, list: Node) -> Vec<Param> {
        let mut params = Vec::new();
        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            let Some(ty) = decl.child_by_field_name("type") else {
                continue;
            };
            let mut name_cursor = decl.walk();
            let names = decl
                .children_by_field_name("name", &mut name_cursor)
                .filter(|n| n.is_named())
                .map(|n| self.text(n).to_string())
                .collect();
            let ty = match decl.kind() {
                "parameter_declaration" => self.type_expr(ty),
                "variadic_parameter_declaration" => TypeExpr::Variadic(Box::new(self.type_expr(ty))),
                _ => continue,
            };
            params.push(Param { names, ty });
        }
        params
    }

    fn type_expr(&self, node: Node) -> TypeExpr {
        let child = |field: &str| node.child_by_field_name(field).map(|n| Box::new(self.type_expr(n)));
        match node.kind() {
            "type_identifier" | "qualified_type" | "identifier" => TypeExpr::Named(squash(self.text(node))),
            "pointer_type" => match first_named(node) {
                Some(inner) => TypeExpr::Pointer(Box::new(self.type_expr(inner))),
                None => TypeExpr::Other,
            },
            "slice_type" => child("element").map(TypeExpr::Slice).unwrap_or(TypeExpr::Other),
            "array_type" => match (node.child_by_field_name("length"), child("element")) {
                (Some(length), Some(element)) => TypeExpr::Array(squash(self.text(length)), element),
                _ => TypeExpr::Other,
            },
            "implicit_length_array_type" => child("element")
                .map(|element| TypeExpr::Array("...".to_string(), element))
                .unwrap_or(TypeExpr::Other),
            "map_type" => match (child("key"), child("value")) {
                (Some(key), Some(value)) => TypeExpr::Map(key, value),
                _ => TypeExpr::Other,
            },
            "generic_type" => match (child("type"), node.child_by_field_name("type_arguments")) {
                (Some(base), Some(args)) => TypeExpr::Generic(base, squash(self.text(args))),
                _ => TypeExpr::Other,
            },
            "parenthesized_type" => first_named(node).map(|inner| self.type_expr(inner)).unwrap_or(TypeExpr::Other),
            "struct_type" => TypeExpr::Struct {
                empty: first_named(node).map_or(true, is_empty_body),
            },
            "interface_type" => TypeExpr::Interface {
                empty: is_empty_body(node),
            },
            "channel_type" => TypeExpr::Chan,
            "function_type" => TypeExpr::Func,
            _ => TypeExpr::Other,
        }
    }

    fn position(&self, node: Node) -> Position {
        let start = node.start_position();
        Position {
            file: self.file.to_string(),
            line: start.row + 1,
            column: start.column + 1,
        }
    }

    fn syntax_error(&self, node: Node) -> GotreeError {
        let start = node.start_position();
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let snippet: String = self.text(node).lines().next().unwrap_or("").trim().chars().take(24).collect();
            if snippet.is_empty() {
                "syntax error".to_string()
            } else {
                format!("syntax error near `{}`", snippet)
            }
        };
        GotreeError::parse_error(self.file, start.row + 1, start.column + 1, message)
    }

    fn text(&self, node: Node) -> &'a str {
        self.source.get(node.byte_range()).unwrap_or("")
    }
}

/// Specs of a declaration, looking through parenthesized spec lists
fn specs<'t>(decl: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        if child.kind() == kind {
            found.push(child);
        } else if child.kind().ends_with("_spec_list") {
            found.extend(specs(child, kind));
        }
    }
    found
}

fn first_named(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|n| n.kind() != "comment");
    found
}

/// True when a struct field list or interface body holds nothing but comments
fn is_empty_body(node: Node) -> bool {
    first_named(node).is_none()
}

/// First ERROR or MISSING node in document order
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}

/// Collapse runs of whitespace the way gofmt would print a short type
fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
