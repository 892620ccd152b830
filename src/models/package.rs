//! Package tree data structures
//!
//! These are the nodes gotree serializes. Empty strings and empty collections
//! are skipped when serializing so large trees stay readable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A named declaration occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    /// Declared identifier(s), comma-joined for multi-name specs
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Human-readable signature, e.g. `const a int`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub long_name: String,

    /// `file:line:col`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
}

impl Object {
    pub fn new(name: impl Into<String>, long_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            long_name: long_name.into(),
            position: position.into(),
        }
    }
}

/// A declared type and the methods attached to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    #[serde(flatten)]
    pub object: Object,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Object>,
}

impl Type {
    pub fn new(object: Object) -> Self {
        Self {
            object,
            methods: Vec::new(),
        }
    }

    /// A type that so far is only known from a method receiver
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(Object::new(name, "", ""))
    }

    /// True while no type declaration has filled this entry in
    pub fn is_placeholder(&self) -> bool {
        self.object.position.is_empty()
    }
}

/// What a package node represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Directory without source of its own, kept to connect descendants
    #[default]
    Stub,
    /// Normal library package
    Package,
    /// Entry-point (`main`) package, named after its directory
    Command,
    /// External test package (`*_test`)
    Test,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Stub => write!(f, "stub"),
            PackageKind::Package => write!(f, "package"),
            PackageKind::Command => write!(f, "command"),
            PackageKind::Test => write!(f, "test"),
        }
    }
}

/// A node of the package tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub kind: PackageKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consts: Vec<Object>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<Object>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub funcs: Vec<Object>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<Object>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Object>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Object>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<Type>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub sources: BTreeSet<String>,
}

impl Package {
    /// Create an empty package node of the given kind
    pub fn new(name: impl Into<String>, kind: PackageKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Create a stub node for a directory with no package content
    pub fn stub(name: impl Into<String>) -> Self {
        Self::new(name, PackageKind::Stub)
    }

    pub fn is_stub(&self) -> bool {
        self.kind == PackageKind::Stub
    }

    /// Number of declarations held directly by this node, methods included
    pub fn declaration_count(&self) -> usize {
        self.consts.len()
            + self.vars.len()
            + self.funcs.len()
            + self.tests.len()
            + self.interfaces.len()
            + self.aliases.len()
            + self.types.len()
            + self.types.iter().map(|t| t.methods.len()).sum::<usize>()
    }

    /// Visit this node and every descendant, parents first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Package, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a Package, usize)) {
        visit(self, depth);
        for child in &self.packages {
            child.walk_at(depth + 1, visit);
        }
    }
}
