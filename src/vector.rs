//! # Vector catalog
//!
//! Builders for the `vector` namespace: reductions over ordered sequences.
//! These pair with tuple nodes: `vector::sum(Expr::tuple([...]))` is a
//! call over a literal sequence whose elements may themselves be full
//! subtrees.

use crate::ast::{Expr, Symbol};
use crate::runtime::registry::{FunctionDef, FunctionRegistry};

/// The namespace tag every reference built here carries.
pub const NAMESPACE: &str = "vector";

fn call1(name: &str, x: impl Into<Expr>) -> Expr {
    Expr::call(Symbol::namespaced(NAMESPACE, name), [x.into()])
}

/// `vector.sum(xs)`, the sum of a sequence.
///
/// # Examples
///
/// ```rust
/// use sigil::{vector, ast::Expr};
/// let e = vector::sum(Expr::tuple([Expr::symbol("x"), Expr::literal(2.0)]));
/// assert_eq!(e.to_string(), "vector.sum((x, 2))");
/// ```
pub fn sum(xs: impl Into<Expr>) -> Expr {
    call1("sum", xs)
}

/// `vector.prod(xs)`, the product of a sequence.
pub fn prod(xs: impl Into<Expr>) -> Expr {
    call1("prod", xs)
}

/// Installs the catalog's definitions into the given registry.
pub fn register(registry: &FunctionRegistry) {
    registry.define(&FunctionDef::namespaced(NAMESPACE, "sum", 1));
    registry.define(&FunctionDef::namespaced(NAMESPACE, "prod", 1));
}
