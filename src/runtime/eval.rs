//! The evaluator.
//!
//! Recursive post-order reduction of a tree to a value against a supplied
//! backend. Operators resolve through the backend's namespace by their
//! fixed names; named calls resolve through the function registry (which
//! consults the backend); free names become backend-native symbolic
//! placeholders where the backend supports them.
//!
//! Evaluation never mutates its input and returns either a complete value
//! or an error, never a partial result. The one observable side channel is the
//! advisory notice emitted when a call defaults to the standard math
//! backend, routed through an injectable [`NoticeSink`].

use crate::ast::{Expr, Value};
use crate::errors::SigilError;
use crate::runtime::backend::Backend;
use crate::runtime::registry::FunctionRegistry;
use crate::runtime::std_math::StdMath;

// ============================================================================
// NOTICES
// ============================================================================

/// Sink for advisory notices, to make the side channel testable and
/// injectable.
pub trait NoticeSink {
    fn emit(&mut self, text: &str);
}

/// Discards notices; for embedding contexts that want silence.
pub struct NullSink;

impl NoticeSink for NullSink {
    fn emit(&mut self, _text: &str) {}
}

/// Writes notices to stderr. Used by the default evaluation entry point.
pub struct StderrSink;

impl NoticeSink for StderrSink {
    fn emit(&mut self, text: &str) {
        eprintln!("sigil: {}", text);
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Per-evaluation configuration: the function registry consulted for named
/// calls, and the recursion guard.
pub struct EvalOptions {
    pub max_depth: usize,
    pub registry: FunctionRegistry,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_depth: 128,
            registry: FunctionRegistry::with_builtins(),
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Evaluates a tree against an explicit backend.
pub fn eval(expr: &Expr, backend: &dyn Backend, opts: &EvalOptions) -> Result<Value, SigilError> {
    eval_expr(expr, backend, opts, 0)
}

/// Evaluates a tree with no backend supplied: the standard math backend is
/// used, and one advisory notice per call is emitted to stderr.
pub fn eval_default(expr: &Expr) -> Result<Value, SigilError> {
    eval_default_into(expr, &mut StderrSink, &EvalOptions::default())
}

/// The default-backend path with an injectable notice sink.
pub fn eval_default_into(
    expr: &Expr,
    output: &mut dyn NoticeSink,
    opts: &EvalOptions,
) -> Result<Value, SigilError> {
    output.emit("no backend supplied; defaulting to the standard math backend");
    eval(expr, &StdMath, opts)
}

// ============================================================================
// CORE RECURSION
// ============================================================================

fn eval_expr(
    expr: &Expr,
    backend: &dyn Backend,
    opts: &EvalOptions,
    depth: usize,
) -> Result<Value, SigilError> {
    if depth > opts.max_depth {
        return Err(SigilError::RecursionLimit {
            limit: opts.max_depth,
        });
    }

    match expr {
        Expr::Literal(value) => Ok(value.clone()),

        Expr::Tuple(items) => {
            let values = items
                .iter()
                .map(|item| eval_expr(item, backend, opts, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(values))
        }

        Expr::Symbol(sym) => {
            if sym.is_free() {
                backend
                    .make_symbol(&sym.name)
                    .ok_or_else(|| SigilError::UnboundName {
                        name: sym.name.clone(),
                        backend: backend.name().to_string(),
                    })
            } else {
                // Catalog constants resolve through the backend's namespace.
                backend
                    .lookup_value(&sym.qualified())
                    .ok_or_else(|| SigilError::UnsupportedOperation {
                        name: sym.qualified(),
                        backend: backend.name().to_string(),
                    })
            }
        }

        Expr::Unary { op, operand } => {
            let value = eval_expr(operand, backend, opts, depth + 1)?;
            let f = backend
                .lookup(op.lookup_name())
                .ok_or_else(|| SigilError::UnsupportedOperation {
                    name: op.lookup_name().to_string(),
                    backend: backend.name().to_string(),
                })?;
            f(&[value])
        }

        Expr::Binary { op, lhs, rhs } => {
            let left = eval_expr(lhs, backend, opts, depth + 1)?;
            let right = eval_expr(rhs, backend, opts, depth + 1)?;
            let f = backend
                .lookup(op.lookup_name())
                .ok_or_else(|| SigilError::UnsupportedOperation {
                    name: op.lookup_name().to_string(),
                    backend: backend.name().to_string(),
                })?;
            f(&[left, right])
        }

        Expr::Call { func, args } => {
            let values = args
                .iter()
                .map(|arg| eval_expr(arg, backend, opts, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(expected) = opts.registry.declared_arity(func) {
                if values.len() != expected {
                    return Err(SigilError::MalformedNode {
                        message: format!(
                            "call to '{}' carries {} argument(s), declared arity is {}",
                            func.qualified(),
                            values.len(),
                            expected
                        ),
                    });
                }
            }
            let f = opts.registry.resolve(func, backend)?;
            f(&values)
        }
    }
}
