//! # Standard math backend
//!
//! The built-in backend used when evaluation is asked to run without an
//! explicit one. It implements every operator tag plus the `scalar` and
//! `vector` catalogs over plain `f64` arithmetic, and exposes no symbolic
//! value constructor, so free names fail under it.
//!
//! All natives here are pure functions over values, in the engine's native
//! calling convention ([`NativeFn`]).

use once_cell::sync::Lazy;

use crate::ast::Value;
use crate::errors::SigilError;
use crate::runtime::backend::{Backend, BackendId, NativeFn};

// ============================================================================
// HELPERS
// ============================================================================

/// Extracts a number from a value, or reports a type mismatch.
fn number(value: &Value, operation: &str) -> Result<f64, SigilError> {
    value.as_number().ok_or_else(|| SigilError::TypeMismatch {
        operation: operation.to_string(),
        expected: "Number".to_string(),
        actual: value.type_name().to_string(),
    })
}

fn boolean(value: &Value, operation: &str) -> Result<bool, SigilError> {
    value.as_bool().ok_or_else(|| SigilError::TypeMismatch {
        operation: operation.to_string(),
        expected: "Bool".to_string(),
        actual: value.type_name().to_string(),
    })
}

fn expect_arity(args: &[Value], expected: usize, operation: &str) -> Result<(), SigilError> {
    if args.len() != expected {
        return Err(SigilError::MalformedNode {
            message: format!(
                "'{}' expects {} argument(s), got {}",
                operation,
                expected,
                args.len()
            ),
        });
    }
    Ok(())
}

fn binary_numeric(args: &[Value], operation: &str, f: fn(f64, f64) -> f64) -> Result<Value, SigilError> {
    expect_arity(args, 2, operation)?;
    let a = number(&args[0], operation)?;
    let b = number(&args[1], operation)?;
    Ok(Value::Number(f(a, b)))
}

fn compare_numeric(args: &[Value], operation: &str, f: fn(f64, f64) -> bool) -> Result<Value, SigilError> {
    expect_arity(args, 2, operation)?;
    let a = number(&args[0], operation)?;
    let b = number(&args[1], operation)?;
    Ok(Value::Bool(f(a, b)))
}

fn unary_numeric(args: &[Value], operation: &str, f: fn(f64) -> f64) -> Result<Value, SigilError> {
    expect_arity(args, 1, operation)?;
    Ok(Value::Number(f(number(&args[0], operation)?)))
}

fn fold_numeric(args: &[Value], operation: &str, init: f64, f: fn(f64, f64) -> f64) -> Result<Value, SigilError> {
    expect_arity(args, 1, operation)?;
    let items = args[0].as_list().ok_or_else(|| SigilError::TypeMismatch {
        operation: operation.to_string(),
        expected: "List".to_string(),
        actual: args[0].type_name().to_string(),
    })?;
    let mut acc = init;
    for item in items {
        acc = f(acc, number(item, operation)?);
    }
    Ok(Value::Number(acc))
}

// ============================================================================
// OPERATORS
// ============================================================================

/// Adds two numbers.
pub const NATIVE_ADD: NativeFn = |args| binary_numeric(args, "add", |a, b| a + b);

/// Subtracts two numbers.
pub const NATIVE_SUB: NativeFn = |args| binary_numeric(args, "sub", |a, b| a - b);

/// Multiplies two numbers.
pub const NATIVE_MUL: NativeFn = |args| binary_numeric(args, "mul", |a, b| a * b);

/// Divides two numbers. Division follows IEEE 754: dividing by zero yields
/// an infinity or NaN, not an error.
pub const NATIVE_DIV: NativeFn = |args| binary_numeric(args, "div", |a, b| a / b);

pub const NATIVE_MOD: NativeFn = |args| binary_numeric(args, "mod", |a, b| a % b);

pub const NATIVE_POW: NativeFn = |args| binary_numeric(args, "pow", f64::powf);

/// Structural equality over any two values.
pub const NATIVE_EQ: NativeFn = |args| {
    expect_arity(args, 2, "eq")?;
    Ok(Value::Bool(args[0] == args[1]))
};

pub const NATIVE_NE: NativeFn = |args| {
    expect_arity(args, 2, "ne")?;
    Ok(Value::Bool(args[0] != args[1]))
};

pub const NATIVE_LT: NativeFn = |args| compare_numeric(args, "lt", |a, b| a < b);
pub const NATIVE_LE: NativeFn = |args| compare_numeric(args, "le", |a, b| a <= b);
pub const NATIVE_GT: NativeFn = |args| compare_numeric(args, "gt", |a, b| a > b);
pub const NATIVE_GE: NativeFn = |args| compare_numeric(args, "ge", |a, b| a >= b);

pub const NATIVE_AND: NativeFn = |args| {
    expect_arity(args, 2, "and")?;
    Ok(Value::Bool(boolean(&args[0], "and")? && boolean(&args[1], "and")?))
};

pub const NATIVE_OR: NativeFn = |args| {
    expect_arity(args, 2, "or")?;
    Ok(Value::Bool(boolean(&args[0], "or")? || boolean(&args[1], "or")?))
};

/// Numeric negation.
pub const NATIVE_NEG: NativeFn = |args| unary_numeric(args, "neg", |a| -a);

/// Boolean inversion.
pub const NATIVE_NOT: NativeFn = |args| {
    expect_arity(args, 1, "not")?;
    Ok(Value::Bool(!boolean(&args[0], "not")?))
};

// ============================================================================
// SCALAR CATALOG
// ============================================================================

pub const NATIVE_ABS: NativeFn = |args| unary_numeric(args, "scalar.abs", f64::abs);
pub const NATIVE_CEIL: NativeFn = |args| unary_numeric(args, "scalar.ceil", f64::ceil);
pub const NATIVE_FLOOR: NativeFn = |args| unary_numeric(args, "scalar.floor", f64::floor);
pub const NATIVE_SQRT: NativeFn = |args| unary_numeric(args, "scalar.sqrt", f64::sqrt);
pub const NATIVE_EXP: NativeFn = |args| unary_numeric(args, "scalar.exp", f64::exp);
pub const NATIVE_LOG: NativeFn = |args| unary_numeric(args, "scalar.log", f64::ln);
pub const NATIVE_LOG2: NativeFn = |args| unary_numeric(args, "scalar.log2", f64::log2);
pub const NATIVE_LOG10: NativeFn = |args| unary_numeric(args, "scalar.log10", f64::log10);
pub const NATIVE_COS: NativeFn = |args| unary_numeric(args, "scalar.cos", f64::cos);
pub const NATIVE_SIN: NativeFn = |args| unary_numeric(args, "scalar.sin", f64::sin);
pub const NATIVE_TAN: NativeFn = |args| unary_numeric(args, "scalar.tan", f64::tan);
pub const NATIVE_ACOS: NativeFn = |args| unary_numeric(args, "scalar.acos", f64::acos);
pub const NATIVE_ASIN: NativeFn = |args| unary_numeric(args, "scalar.asin", f64::asin);
pub const NATIVE_ATAN: NativeFn = |args| unary_numeric(args, "scalar.atan", f64::atan);
pub const NATIVE_ATAN2: NativeFn = |args| binary_numeric(args, "scalar.atan2", f64::atan2);
pub const NATIVE_SINH: NativeFn = |args| unary_numeric(args, "scalar.sinh", f64::sinh);
pub const NATIVE_COSH: NativeFn = |args| unary_numeric(args, "scalar.cosh", f64::cosh);
pub const NATIVE_TANH: NativeFn = |args| unary_numeric(args, "scalar.tanh", f64::tanh);

// ============================================================================
// VECTOR CATALOG
// ============================================================================

/// Sums the numbers in a list.
pub const NATIVE_VEC_SUM: NativeFn = |args| fold_numeric(args, "vector.sum", 0.0, |a, b| a + b);

/// Multiplies the numbers in a list.
pub const NATIVE_VEC_PROD: NativeFn = |args| fold_numeric(args, "vector.prod", 1.0, |a, b| a * b);

// ============================================================================
// BACKEND
// ============================================================================

static STD_MATH_ID: Lazy<BackendId> = Lazy::new(BackendId::mint);

/// The standard math backend. Stateless; every instance shares one identity
/// so registry overrides against it behave as against a single namespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdMath;

impl Backend for StdMath {
    fn id(&self) -> BackendId {
        *STD_MATH_ID
    }

    fn name(&self) -> &str {
        "std-math"
    }

    fn lookup(&self, name: &str) -> Option<NativeFn> {
        match name {
            "add" => Some(NATIVE_ADD),
            "sub" => Some(NATIVE_SUB),
            "mul" => Some(NATIVE_MUL),
            "div" => Some(NATIVE_DIV),
            "mod" => Some(NATIVE_MOD),
            "pow" => Some(NATIVE_POW),
            "eq" => Some(NATIVE_EQ),
            "ne" => Some(NATIVE_NE),
            "lt" => Some(NATIVE_LT),
            "le" => Some(NATIVE_LE),
            "gt" => Some(NATIVE_GT),
            "ge" => Some(NATIVE_GE),
            "and" => Some(NATIVE_AND),
            "or" => Some(NATIVE_OR),
            "neg" => Some(NATIVE_NEG),
            "not" => Some(NATIVE_NOT),
            "scalar.abs" => Some(NATIVE_ABS),
            "scalar.ceil" => Some(NATIVE_CEIL),
            "scalar.floor" => Some(NATIVE_FLOOR),
            "scalar.sqrt" => Some(NATIVE_SQRT),
            "scalar.exp" => Some(NATIVE_EXP),
            "scalar.log" => Some(NATIVE_LOG),
            "scalar.log2" => Some(NATIVE_LOG2),
            "scalar.log10" => Some(NATIVE_LOG10),
            "scalar.cos" => Some(NATIVE_COS),
            "scalar.sin" => Some(NATIVE_SIN),
            "scalar.tan" => Some(NATIVE_TAN),
            "scalar.acos" => Some(NATIVE_ACOS),
            "scalar.asin" => Some(NATIVE_ASIN),
            "scalar.atan" => Some(NATIVE_ATAN),
            "scalar.atan2" => Some(NATIVE_ATAN2),
            "scalar.sinh" => Some(NATIVE_SINH),
            "scalar.cosh" => Some(NATIVE_COSH),
            "scalar.tanh" => Some(NATIVE_TANH),
            "vector.sum" => Some(NATIVE_VEC_SUM),
            "vector.prod" => Some(NATIVE_VEC_PROD),
            _ => None,
        }
    }

    fn lookup_value(&self, name: &str) -> Option<Value> {
        match name {
            "scalar.pi" => Some(Value::Number(std::f64::consts::PI)),
            "scalar.e" => Some(Value::Number(std::f64::consts::E)),
            "scalar.tau" => Some(Value::Number(std::f64::consts::TAU)),
            "scalar.inf" => Some(Value::Number(f64::INFINITY)),
            "scalar.nan" => Some(Value::Number(f64::NAN)),
            _ => None,
        }
    }
}
