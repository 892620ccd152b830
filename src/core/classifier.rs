//! Declaration classification
//!
//! Turns one compilation unit into a [`Package`] node: values go to
//! `consts`/`vars`, type declarations to `interfaces`/`aliases`/`types`, and
//! functions to `funcs`, `tests` or the method list of their receiver type.

use std::collections::{HashMap, HashSet};

use crate::core::signature::{render_func, render_type_decl, render_value};
use crate::models::ast::{CompilationUnit, Decl, FuncDecl, TypeShape, ValueKind};
use crate::models::package::{Object, Package, PackageKind, Type};

/// Types of one unit keyed by name, in order of first mention
///
/// A method may be declared before its type, or in another file. The first
/// mention creates the entry; a later type declaration fills it in.
#[derive(Default)]
struct TypeArena {
    types: Vec<Type>,
    index: HashMap<String, usize>,
}

impl TypeArena {
    fn slot(&mut self, name: &str) -> &mut Type {
        let idx = *self.index.entry(name.to_string()).or_insert_with(|| {
            self.types.push(Type::placeholder(name));
            self.types.len() - 1
        });
        &mut self.types[idx]
    }

    fn declare(&mut self, object: Object) {
        let slot = self.slot(&object.name);
        slot.object = object;
    }

    fn attach(&mut self, type_name: &str, method: Object) {
        self.slot(type_name).methods.push(method);
    }

    /// Placeholders for receivers never declared in this unit are kept
    fn finish(self) -> Vec<Type> {
        self.types
    }
}

/// Classify the declarations of `unit` into a package node
pub fn classify(unit: &CompilationUnit, name: &str, kind: PackageKind) -> Package {
    let mut package = Package::new(name, kind);
    let mut types = TypeArena::default();
    let aliases = alias_names(unit);

    for file in &unit.files {
        package.sources.insert(file.name.clone());

        for decl in &file.decls {
            match decl {
                Decl::Value(spec) => {
                    let object = Object::new(spec.names.join(", "), render_value(spec), spec.position.to_string());
                    match spec.kind {
                        ValueKind::Const => package.consts.push(object),
                        ValueKind::Var => package.vars.push(object),
                    }
                }
                Decl::Type(spec) => {
                    let object = Object::new(&spec.name, render_type_decl(spec), spec.position.to_string());
                    match &spec.shape {
                        TypeShape::Interface => package.interfaces.push(object),
                        TypeShape::Alias(_) => package.aliases.push(object),
                        TypeShape::Other(_) => types.declare(object),
                    }
                }
                Decl::Func(func) => {
                    let object = func_object(func);
                    match &func.receiver {
                        Some(receiver) => match receiver.base_type_name() {
                            Some(type_name) if aliases.contains(type_name) => {
                                tracing::debug!(method = %func.name, alias = type_name, position = %func.position, "skipping method declared on an alias");
                            }
                            Some(type_name) => types.attach(type_name, object),
                            None => {
                                tracing::debug!(method = %func.name, position = %func.position, "skipping method with unnamed receiver type");
                            }
                        },
                        None if kind == PackageKind::Test && func.name.starts_with("Test") => package.tests.push(object),
                        None => package.funcs.push(object),
                    }
                }
            }
        }
    }

    package.types = types.finish();
    package
}

/// Alias names declared anywhere in the unit; methods on them are dropped
fn alias_names(unit: &CompilationUnit) -> HashSet<&str> {
    unit.files
        .iter()
        .flat_map(|file| &file.decls)
        .filter_map(|decl| match decl {
            Decl::Type(spec) if matches!(spec.shape, TypeShape::Alias(_)) => Some(spec.name.as_str()),
            _ => None,
        })
        .collect()
}

fn func_object(func: &FuncDecl) -> Object {
    let long_name = render_func(func).unwrap_or_else(|| func.name.clone());
    Object::new(&func.name, long_name, func.position.to_string())
}
