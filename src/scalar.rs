//! # Scalar catalog
//!
//! Builder functions for the `scalar` namespace: named mathematical
//! functions and constants over single numbers. Each builder produces a
//! symbolic call or symbol node; nothing is computed until evaluation,
//! when the active backend supplies the implementation.
//!
//! The catalog is deliberately small; it exists to exercise dispatch, not
//! to enumerate all of mathematics. Backends may expose more names than the
//! builders here cover, and callers can always construct calls directly
//! with [`Expr::call`].

use crate::ast::{Expr, Symbol};
use crate::runtime::registry::{FunctionDef, FunctionRegistry};

/// The namespace tag every reference built here carries.
pub const NAMESPACE: &str = "scalar";

fn call1(name: &str, x: impl Into<Expr>) -> Expr {
    Expr::call(Symbol::namespaced(NAMESPACE, name), [x.into()])
}

fn call2(name: &str, x: impl Into<Expr>, y: impl Into<Expr>) -> Expr {
    Expr::call(Symbol::namespaced(NAMESPACE, name), [x.into(), y.into()])
}

fn constant(name: &str) -> Expr {
    Expr::Symbol(Symbol::namespaced(NAMESPACE, name))
}

// ============================================================================
// FUNCTIONS
// ============================================================================

/// `scalar.abs(x)`
///
/// # Examples
///
/// ```rust
/// use sigil::{scalar, ast::Expr};
/// let e = scalar::abs(Expr::symbol("x"));
/// assert_eq!(e.to_string(), "scalar.abs(x)");
/// ```
pub fn abs(x: impl Into<Expr>) -> Expr {
    call1("abs", x)
}

pub fn ceil(x: impl Into<Expr>) -> Expr {
    call1("ceil", x)
}

pub fn floor(x: impl Into<Expr>) -> Expr {
    call1("floor", x)
}

pub fn sqrt(x: impl Into<Expr>) -> Expr {
    call1("sqrt", x)
}

pub fn exp(x: impl Into<Expr>) -> Expr {
    call1("exp", x)
}

/// Natural logarithm.
pub fn log(x: impl Into<Expr>) -> Expr {
    call1("log", x)
}

pub fn log2(x: impl Into<Expr>) -> Expr {
    call1("log2", x)
}

pub fn log10(x: impl Into<Expr>) -> Expr {
    call1("log10", x)
}

pub fn cos(x: impl Into<Expr>) -> Expr {
    call1("cos", x)
}

pub fn sin(x: impl Into<Expr>) -> Expr {
    call1("sin", x)
}

pub fn tan(x: impl Into<Expr>) -> Expr {
    call1("tan", x)
}

pub fn acos(x: impl Into<Expr>) -> Expr {
    call1("acos", x)
}

pub fn asin(x: impl Into<Expr>) -> Expr {
    call1("asin", x)
}

pub fn atan(x: impl Into<Expr>) -> Expr {
    call1("atan", x)
}

pub fn atan2(y: impl Into<Expr>, x: impl Into<Expr>) -> Expr {
    call2("atan2", y, x)
}

pub fn sinh(x: impl Into<Expr>) -> Expr {
    call1("sinh", x)
}

pub fn cosh(x: impl Into<Expr>) -> Expr {
    call1("cosh", x)
}

pub fn tanh(x: impl Into<Expr>) -> Expr {
    call1("tanh", x)
}

// ============================================================================
// CONSTANTS
// ============================================================================

pub fn pi() -> Expr {
    constant("pi")
}

pub fn e() -> Expr {
    constant("e")
}

pub fn tau() -> Expr {
    constant("tau")
}

pub fn inf() -> Expr {
    constant("inf")
}

pub fn nan() -> Expr {
    constant("nan")
}

// ============================================================================
// REGISTRATION
// ============================================================================

/// Installs the catalog's definitions (declared arities, no fallbacks;
/// implementations come from backends) into the given registry.
pub fn register(registry: &FunctionRegistry) {
    const UNARY: &[&str] = &[
        "abs", "ceil", "floor", "sqrt", "exp", "log", "log2", "log10", "cos", "sin", "tan",
        "acos", "asin", "atan", "sinh", "cosh", "tanh",
    ];
    for name in UNARY {
        registry.define(&FunctionDef::namespaced(NAMESPACE, *name, 1));
    }
    registry.define(&FunctionDef::namespaced(NAMESPACE, "atan2", 2));
}
