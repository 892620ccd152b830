//! Best-effort textual rendering of declaration signatures
//!
//! Every renderer returns `None` for shapes it cannot print confidently
//! (channels, function types, non-empty inline structs and interfaces). The
//! caller falls back to a simpler form instead of printing broken text.

use crate::models::ast::{FuncDecl, Param, Results, TypeExpr, TypeShape, TypeSpec, ValueSpec};

/// Render a type expression
pub fn render_type(ty: &TypeExpr) -> Option<String> {
    match ty {
        TypeExpr::Named(name) => Some(name.clone()),
        TypeExpr::Pointer(inner) => Some(format!("*{}", render_type(inner)?)),
        TypeExpr::Slice(inner) => Some(format!("[]{}", render_type(inner)?)),
        TypeExpr::Array(len, inner) => Some(format!("[{}]{}", len, render_type(inner)?)),
        TypeExpr::Map(key, value) => Some(format!("map[{}]{}", render_type(key)?, render_type(value)?)),
        TypeExpr::Generic(base, args) => Some(format!("{}{}", render_type(base)?, args)),
        TypeExpr::Variadic(inner) => Some(format!("...{}", render_type(inner)?)),
        TypeExpr::Struct { empty: true } => Some("struct{}".to_string()),
        TypeExpr::Interface { empty: true } => Some("interface{}".to_string()),
        TypeExpr::Struct { .. } | TypeExpr::Interface { .. } | TypeExpr::Chan | TypeExpr::Func | TypeExpr::Other => None,
    }
}

/// Render a parameter list without the surrounding parentheses
pub fn render_params(params: &[Param]) -> Option<String> {
    let mut parts = Vec::with_capacity(params.len());
    for param in params {
        let ty = render_type(&param.ty)?;
        if param.names.is_empty() {
            parts.push(ty);
        } else {
            parts.push(format!("{} {}", param.names.join(", "), ty));
        }
    }
    Some(parts.join(", "))
}

fn render_results(results: &Results) -> Option<String> {
    match results {
        Results::Single(ty) => render_type(ty),
        Results::List(params) => match params.as_slice() {
            [] => Some(String::new()),
            [only] if only.names.is_empty() => render_type(&only.ty),
            _ => Some(format!("({})", render_params(params)?)),
        },
    }
}

/// `func (r *T) Name(a, b int) error`
pub fn render_func(func: &FuncDecl) -> Option<String> {
    let mut out = String::from("func ");
    if let Some(receiver) = &func.receiver {
        let ty = render_type(&receiver.ty)?;
        match &receiver.name {
            Some(name) => out.push_str(&format!("({} {}) ", name, ty)),
            None => out.push_str(&format!("({}) ", ty)),
        }
    }
    out.push_str(&func.name);
    out.push('(');
    out.push_str(&render_params(&func.params)?);
    out.push(')');
    if let Some(results) = &func.results {
        let results = render_results(results)?;
        if !results.is_empty() {
            out.push(' ');
            out.push_str(&results);
        }
    }
    Some(out)
}

/// `const a, b int`, or `const a, b` when the type is absent or unrenderable
pub fn render_value(spec: &ValueSpec) -> String {
    let names = spec.names.join(", ");
    match spec.ty.as_ref().and_then(render_type) {
        Some(ty) => format!("{} {} {}", spec.kind.keyword(), names, ty),
        None => format!("{} {}", spec.kind.keyword(), names),
    }
}

/// `type T struct`, `type I interface`, `type A = B`, `type N int`
pub fn render_type_decl(spec: &TypeSpec) -> String {
    let rhs = match &spec.shape {
        TypeShape::Interface => Some("interface".to_string()),
        TypeShape::Alias(target) => render_type(target).map(|t| format!("= {}", t)),
        TypeShape::Other(TypeExpr::Struct { .. }) => Some("struct".to_string()),
        TypeShape::Other(ty) => render_type(ty),
    };
    match rhs {
        Some(rhs) => format!("type {} {}", spec.name, rhs),
        None => format!("type {}", spec.name),
    }
}
