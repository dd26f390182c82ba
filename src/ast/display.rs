//! Canonical rendering of expression trees.
//!
//! Parentheses are inserted only where precedence or associativity requires
//! them: a child is wrapped iff its operator binds strictly looser than its
//! parent, or equally with an associativity/position conflict. `a - (b - c)`
//! keeps its parentheses; `(a - b) - c` renders as `a - b - c`.

use std::fmt;

use crate::ast::ops::{Assoc, BinaryOp, UnaryOp};
use crate::ast::Expr;

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

fn write_node(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr {
        Expr::Literal(value) => write!(f, "{}", value),
        Expr::Symbol(sym) => write!(f, "{}", sym),
        Expr::Tuple(items) => {
            write!(f, "(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_node(item, f)?;
            }
            // A one-element tuple keeps the trailing comma so it cannot be
            // read back as plain grouping.
            if items.len() == 1 {
                write!(f, ",")?;
            }
            write!(f, ")")
        }
        Expr::Unary { op, operand } => {
            write!(f, "{}", op.token())?;
            write_unary_operand(operand, *op, f)
        }
        Expr::Binary { op, lhs, rhs } => {
            write_binary_child(lhs, *op, Side::Left, f)?;
            write!(f, " {} ", op.token())?;
            write_binary_child(rhs, *op, Side::Right, f)
        }
        Expr::Call { func, args } => {
            write!(f, "{}(", func)?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_node(arg, f)?;
            }
            write!(f, ")")
        }
    }
}

/// The precedence of a node's top operator; leaves and calls bind tightest
/// and never need wrapping.
fn operator_precedence(expr: &Expr) -> Option<u8> {
    match expr {
        Expr::Binary { op, .. } => Some(op.precedence()),
        Expr::Unary { op, .. } => Some(op.precedence()),
        _ => None,
    }
}

fn write_binary_child(
    child: &Expr,
    parent: BinaryOp,
    side: Side,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let wrap = match operator_precedence(child) {
        None => false,
        Some(child_prec) => {
            if child_prec < parent.precedence() {
                true
            } else if child_prec > parent.precedence() {
                false
            } else {
                match parent.assoc() {
                    Assoc::Left => side == Side::Right,
                    Assoc::Right => side == Side::Left,
                    Assoc::NonAssoc => true,
                }
            }
        }
    };
    write_maybe_wrapped(child, wrap, f)
}

fn write_unary_operand(operand: &Expr, op: UnaryOp, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Equal precedence also wraps: `-(-x)` reads back unambiguously, `--x`
    // does not.
    let wrap = matches!(operator_precedence(operand), Some(p) if p <= op.precedence());
    write_maybe_wrapped(operand, wrap, f)
}

fn write_maybe_wrapped(expr: &Expr, wrap: bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if wrap {
        write!(f, "(")?;
        write_node(expr, f)?;
        write!(f, ")")
    } else {
        write_node(expr, f)
    }
}
