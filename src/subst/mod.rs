//! Batch substitution of free names.
//!
//! [`substitute`] is the public pipeline: it orders the supplied bindings by
//! dependency, then applies them one at a time. Sequential
//! application in dependency order is what makes simultaneous batches
//! correct: a replacement planted by an earlier binding is still rewritten
//! by the later bindings it references. Untouched subtrees are shared, not
//! copied. The tree is immutable, so sharing is safe.

use std::sync::Arc;

use crate::ast::{Expr, Symbol};
use crate::errors::SigilError;

mod deps;

/// One (name → replacement) pair in a substitution batch.
///
/// Bindings are transient: built by the caller, consumed by one
/// [`substitute`] call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub target: Symbol,
    pub replacement: Expr,
}

impl Binding {
    /// Binds a name to a replacement expression or literal value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sigil::subst::Binding;
    /// use sigil::ast::Expr;
    /// let concrete = Binding::new("x", 5.0);
    /// let aliased = Binding::new("y", Expr::symbol("x") + 1.0);
    /// assert_eq!(concrete.target.name, "x");
    /// assert_eq!(aliased.replacement.to_string(), "x + 1");
    /// ```
    pub fn new(target: impl Into<Symbol>, replacement: impl Into<Expr>) -> Self {
        Binding {
            target: target.into(),
            replacement: replacement.into(),
        }
    }
}

/// Rewrites `expr` by applying the whole batch of bindings at once.
///
/// Binding replacements may reference other names bound in the same batch;
/// the dependency resolver picks an application order that makes those
/// references resolve to the bound values. A cyclic batch fails with
/// [`SigilError::Cycle`] and the input tree is left untouched, with no partial
/// application. Binding a name that never occurs in the tree is a no-op.
pub fn substitute(expr: &Expr, bindings: &[Binding]) -> Result<Expr, SigilError> {
    let order = deps::order_bindings(bindings)?;

    let mut current = Arc::new(expr.clone());
    for i in order {
        let binding = &bindings[i];
        current = apply(&current, &binding.target, &binding.replacement);
    }
    Ok(current.as_ref().clone())
}

/// Applies a single binding over a tree, sharing every subtree the binding
/// does not touch.
fn apply(node: &Arc<Expr>, target: &Symbol, replacement: &Expr) -> Arc<Expr> {
    match rewrite(node, target, replacement) {
        Some(changed) => Arc::new(changed),
        None => Arc::clone(node),
    }
}

/// Returns the rewritten node, or `None` when the subtree does not contain
/// the target at all.
fn rewrite(node: &Expr, target: &Symbol, replacement: &Expr) -> Option<Expr> {
    match node {
        Expr::Literal(_) => None,
        Expr::Symbol(sym) => (sym == target).then(|| replacement.clone()),
        Expr::Tuple(items) => {
            rewrite_children(items, target, replacement).map(Expr::Tuple)
        }
        Expr::Unary { op, operand } => {
            rewrite(operand, target, replacement).map(|changed| Expr::Unary {
                op: *op,
                operand: Arc::new(changed),
            })
        }
        Expr::Binary { op, lhs, rhs } => {
            let new_lhs = rewrite(lhs, target, replacement);
            let new_rhs = rewrite(rhs, target, replacement);
            if new_lhs.is_none() && new_rhs.is_none() {
                return None;
            }
            Some(Expr::Binary {
                op: *op,
                lhs: new_lhs.map_or_else(|| Arc::clone(lhs), Arc::new),
                rhs: new_rhs.map_or_else(|| Arc::clone(rhs), Arc::new),
            })
        }
        Expr::Call { func, args } => {
            // A binding may retarget the call itself, but only to another
            // named function; a non-symbol replacement cannot sit in call
            // position and is ignored there.
            let new_func = (func == target)
                .then(|| replacement.as_symbol().cloned())
                .flatten();
            let new_args = rewrite_children(args, target, replacement);
            if new_func.is_none() && new_args.is_none() {
                return None;
            }
            Some(Expr::Call {
                func: new_func.unwrap_or_else(|| func.clone()),
                args: new_args.unwrap_or_else(|| args.clone()),
            })
        }
    }
}

fn rewrite_children(
    children: &[Arc<Expr>],
    target: &Symbol,
    replacement: &Expr,
) -> Option<Vec<Arc<Expr>>> {
    let rewritten: Vec<Option<Expr>> = children
        .iter()
        .map(|child| rewrite(child, target, replacement))
        .collect();
    if rewritten.iter().all(Option::is_none) {
        return None;
    }
    Some(
        children
            .iter()
            .zip(rewritten)
            .map(|(old, new)| new.map_or_else(|| Arc::clone(old), Arc::new))
            .collect(),
    )
}
