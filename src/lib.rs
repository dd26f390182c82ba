pub use crate::errors::SigilError;

pub mod ast;
pub mod errors;
pub mod runtime;
pub mod scalar;
pub mod subst;
pub mod vector;

pub use ast::{Expr, Symbol, Value};
pub use runtime::backend::{Backend, BackendId, NativeFn};
pub use runtime::eval::{eval, eval_default, eval_default_into, EvalOptions, NoticeSink, NullSink, StderrSink};
pub use runtime::registry::{FunctionDef, FunctionRegistry};
pub use runtime::std_math::StdMath;
pub use subst::{substitute, Binding};
