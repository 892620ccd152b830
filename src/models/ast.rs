//! Declaration-level syntax tree for Go source files
//!
//! The parser lowers each file into these types; nothing below the top-level
//! declarations is kept except what signatures need.

use std::fmt;

/// A 1-based source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// File path relative to the scan root
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A type expression, as far as signatures care about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T`, `pkg.T`
    Named(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T`, `[...]T`
    Array(String, Box<TypeExpr>),
    /// `map[K]V`
    Map(Box<TypeExpr>, Box<TypeExpr>),
    /// `T[A, B]`, arguments kept as written
    Generic(Box<TypeExpr>, String),
    /// `...T` in a parameter list
    Variadic(Box<TypeExpr>),
    /// `struct{...}`, with whether it has any fields
    Struct { empty: bool },
    /// `interface{...}`, with whether it has any elements
    Interface { empty: bool },
    /// `chan T`, `<-chan T`, `chan<- T`
    Chan,
    /// `func(...) ...`
    Func,
    /// Anything else the grammar allows in type position
    Other,
}

/// One parameter group: `a, b int` or an unnamed `int`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

/// A method receiver: `(s *Server)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    pub name: Option<String>,
    pub ty: TypeExpr,
}

impl Receiver {
    /// Name of the receiver's base type with pointer and type arguments stripped
    pub fn base_type_name(&self) -> Option<&str> {
        let mut ty = &self.ty;
        loop {
            match ty {
                TypeExpr::Pointer(inner) | TypeExpr::Generic(inner, _) => ty = inner,
                TypeExpr::Named(name) => return Some(name.as_str()),
                _ => return None,
            }
        }
    }
}

/// `const` or `var`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Const,
    Var,
}

impl ValueKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ValueKind::Const => "const",
            ValueKind::Var => "var",
        }
    }
}

/// One spec of a const/var group: `a, b int = 1, 2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub kind: ValueKind,
    pub names: Vec<String>,
    pub ty: Option<TypeExpr>,
    pub position: Position,
}

/// Right-hand shape of a type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    Interface,
    /// `type A = B`
    Alias(TypeExpr),
    /// Struct, named scalar, slice, map and everything else
    Other(TypeExpr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub shape: TypeShape,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    pub receiver: Option<Receiver>,
    pub params: Vec<Param>,
    /// `None` when the function returns nothing
    pub results: Option<Results>,
    pub position: Position,
}

/// Result list of a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    /// `func f() T`
    Single(TypeExpr),
    /// `func f() (T, error)` or `func f() (n int, err error)`
    List(Vec<Param>),
}

/// A top-level declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Value(ValueSpec),
    Type(TypeSpec),
    Func(FuncDecl),
}

/// A parsed Go file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name without directory
    pub name: String,
    /// Declared package identifier
    pub package: String,
    pub decls: Vec<Decl>,
}

/// All files of one directory that declare the same package identifier
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub package: String,
    pub files: Vec<SourceFile>,
}

impl CompilationUnit {
    pub fn is_test(&self) -> bool {
        self.package.ends_with("_test")
    }

    pub fn is_command(&self) -> bool {
        self.package == "main"
    }
}
