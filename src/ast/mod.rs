//! AST module for the Sigil engine.
//!
//! This module provides the core expression tree types: symbols, literals,
//! operator nodes and named-function calls. Trees are immutable after
//! construction: every transformation produces a new tree, so a tree can be
//! shared freely across substitution and evaluation calls (and across
//! threads).

// ============================================================================
// IMPORTS
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::ops::{BinaryOp, UnaryOp};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A named reference: a name plus the namespace it lives in.
///
/// The empty namespace holds free user symbols; catalogs (e.g. `scalar`)
/// use their own namespaces so built-in names never collide with
/// user-registered ones. Two references are equal iff name and namespace
/// match; identity is the pair, never object identity.
///
/// # Examples
///
/// ```rust
/// use sigil::ast::Symbol;
/// let x = Symbol::new("x");
/// assert_eq!(x.qualified(), "x");
/// let cos = Symbol::namespaced("scalar", "cos");
/// assert_eq!(cos.qualified(), "scalar.cos");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub namespace: String,
}

impl Symbol {
    /// A free symbol in the empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            namespace: String::new(),
        }
    }

    /// A symbol in an explicit namespace.
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// True for free user symbols (empty namespace).
    pub fn is_free(&self) -> bool {
        self.namespace.is_empty()
    }

    /// The dotted lookup name: `namespace.name`, or just `name` when the
    /// namespace is empty.
    pub fn qualified(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol::new(name)
    }
}

/// The core expression node.
///
/// Children are `Arc`-shared: substitution returns a new tree that reuses
/// every untouched subtree of the input.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A concrete value with no children.
    Literal(Value),
    /// A fixed-size ordered sequence whose elements may themselves be
    /// expressions.
    Tuple(Vec<Arc<Expr>>),
    /// A named reference (free variable or catalog constant).
    Symbol(Symbol),
    /// A unary operation.
    Unary { op: UnaryOp, operand: Arc<Expr> },
    /// A binary operation.
    Binary {
        op: BinaryOp,
        lhs: Arc<Expr>,
        rhs: Arc<Expr>,
    },
    /// A call to a named function.
    Call { func: Symbol, args: Vec<Arc<Expr>> },
}

impl Eq for Expr {}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Expr {
    /// A free symbol node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sigil::ast::Expr;
    /// let x = Expr::symbol("x");
    /// assert_eq!(x.to_string(), "x");
    /// ```
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    /// A literal node.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    /// A tuple node from already-built element expressions.
    pub fn tuple(items: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Tuple(items.into_iter().map(Arc::new).collect())
    }

    /// A call node for the given function reference.
    ///
    /// No arity or type validation happens here; errors surface only at
    /// evaluation.
    pub fn call(func: Symbol, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call {
            func,
            args: args.into_iter().map(Arc::new).collect(),
        }
    }

    /// Returns the contained value if this is a literal node.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expr::Literal(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the contained symbol if this is a symbol node.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expr::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Every named reference in the tree (symbol nodes and call targets),
    /// deduplicated, in first-visit order.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut out: Vec<&Symbol> = Vec::new();
        self.walk_symbols(&mut |sym| {
            if !out.contains(&sym) {
                out.push(sym);
            }
        });
        out
    }

    /// The free names in the tree (empty-namespace symbols only),
    /// deduplicated, in first-visit order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sigil::ast::Expr;
    /// let e = Expr::symbol("x") + Expr::symbol("y") * Expr::symbol("x");
    /// let names: Vec<&str> = e.free_symbols().iter().map(|s| s.name.as_str()).collect();
    /// assert_eq!(names, ["x", "y"]);
    /// ```
    pub fn free_symbols(&self) -> Vec<&Symbol> {
        let mut out: Vec<&Symbol> = Vec::new();
        self.walk_symbols(&mut |sym| {
            if sym.is_free() && !out.contains(&sym) {
                out.push(sym);
            }
        });
        out
    }

    /// True if the tree contains the given reference, either as a symbol
    /// node or as a call target.
    pub fn references(&self, sym: &Symbol) -> bool {
        let mut found = false;
        self.walk_symbols(&mut |s| found |= s == sym);
        found
    }

    fn walk_symbols<'a>(&'a self, visit: &mut impl FnMut(&'a Symbol)) {
        match self {
            Expr::Literal(_) => {}
            Expr::Symbol(sym) => visit(sym),
            Expr::Tuple(items) => {
                for item in items {
                    item.walk_symbols(visit);
                }
            }
            Expr::Unary { operand, .. } => operand.walk_symbols(visit),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.walk_symbols(visit);
                rhs.walk_symbols(visit);
            }
            Expr::Call { func, args } => {
                visit(func);
                for arg in args {
                    arg.walk_symbols(visit);
                }
            }
        }
    }
}

// ============================================================================
// PERSISTED FORM
// ============================================================================

/// Serializes a tree to its structured persisted form.
///
/// The form is a tagged-union JSON document sufficient to reconstruct an
/// identical tree without re-running construction code.
pub fn to_json(expr: &Expr) -> serde_json::Result<String> {
    serde_json::to_string(expr)
}

/// Reconstructs a tree from its persisted form.
pub fn from_json(json: &str) -> serde_json::Result<Expr> {
    serde_json::from_str(json)
}

// ============================================================================
// MODULE EXPORTS
// ============================================================================

pub mod builder;
pub mod display;
pub mod ops;
pub mod value;

pub use value::Value;
