//! The function registry.
//!
//! The registry is the single source of truth for named functions: their
//! declared arity, their fallback implementation, and any backend-specific
//! overrides. It is an explicit object owned by the caller (usually inside
//! [`EvalOptions`](crate::runtime::eval::EvalOptions)), never hidden
//! module-level state, and its tables are lock-guarded so concurrent
//! `resolve` reads and registrations cannot lose updates.
//!
//! Resolution order for a call under backend B:
//! 1. the override registered for (function, B),
//! 2. B's own namespace, looked up by the function's qualified name
//!    (this is how catalog functions like `scalar.cos` reach whichever
//!    backend is active without per-backend registration),
//! 3. the function's fallback,
//! 4. otherwise [`SigilError::NoImplementation`].

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ast::{Expr, Symbol};
use crate::errors::SigilError;
use crate::runtime::backend::{Backend, BackendId, NativeFn};
use crate::scalar;
use crate::vector;

/// Descriptor for a named function: its reference, its declared arity, and
/// its fallback implementation.
///
/// A user-defined function is just an ordinary callable wrapped with a name:
///
/// ```rust
/// use sigil::ast::{Expr, Value};
/// use sigil::runtime::registry::{FunctionDef, FunctionRegistry};
///
/// let double = FunctionDef::new("double", 1).with_fallback(|args| {
///     let n = args[0].as_number().expect("number");
///     Ok(Value::Number(2.0 * n))
/// });
/// let registry = FunctionRegistry::new();
/// registry.define(&double);
/// let tree = double.call([Expr::literal(21.0)]);
/// assert_eq!(tree.to_string(), "double(21)");
/// ```
#[derive(Debug, Clone)]
pub struct FunctionDef {
    sym: Symbol,
    arity: Option<usize>,
    fallback: Option<NativeFn>,
}

impl FunctionDef {
    /// A function in the empty (user) namespace with a declared arity.
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FunctionDef {
            sym: Symbol::new(name),
            arity: Some(arity),
            fallback: None,
        }
    }

    /// A function in an explicit catalog namespace.
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>, arity: usize) -> Self {
        FunctionDef {
            sym: Symbol::namespaced(namespace, name),
            arity: Some(arity),
            fallback: None,
        }
    }

    /// A function taking any number of arguments.
    pub fn variadic(name: impl Into<String>) -> Self {
        FunctionDef {
            sym: Symbol::new(name),
            arity: None,
            fallback: None,
        }
    }

    /// Attaches the default implementation used when no backend-specific
    /// override is registered.
    pub fn with_fallback(mut self, fallback: NativeFn) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// The reference call nodes carry.
    pub fn symbol(&self) -> &Symbol {
        &self.sym
    }

    /// Builds a call node. Like every construction path, no validation
    /// happens here; arity is checked at evaluation.
    pub fn call<I>(&self, args: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::call(self.sym.clone(), args.into_iter().map(Into::into))
    }
}

#[derive(Default)]
struct FunctionEntry {
    arity: Option<usize>,
    fallback: Option<NativeFn>,
    overrides: HashMap<BackendId, NativeFn>,
}

/// Registry for all named functions, inspectable at runtime.
#[derive(Default)]
pub struct FunctionRegistry {
    funcs: RwLock<HashMap<Symbol, FunctionEntry>>,
}

impl FunctionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical populated registry: every built-in catalog definition
    /// installed. All entrypoints that want the standard catalogs go
    /// through here so they share one registration path.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        scalar::register(&registry);
        vector::register(&registry);
        registry
    }

    /// Installs (or replaces) a function's definition: declared arity and
    /// fallback. Existing backend overrides are kept.
    pub fn define(&self, def: &FunctionDef) {
        let mut funcs = self.funcs.write().expect("registry lock poisoned");
        let entry = funcs.entry(def.sym.clone()).or_default();
        entry.arity = def.arity;
        entry.fallback = def.fallback;
    }

    /// Attaches `implementation` as the one to use when evaluating a call
    /// to `def`'s function under the backend identified by `backend`.
    ///
    /// Registration is additive and idempotent-overwrite: re-registering
    /// for the same backend replaces the prior entry and never touches the
    /// fallback.
    pub fn register_impl(&self, def: &FunctionDef, backend: BackendId, implementation: NativeFn) {
        let mut funcs = self.funcs.write().expect("registry lock poisoned");
        let entry = funcs.entry(def.sym.clone()).or_insert_with(|| FunctionEntry {
            arity: def.arity,
            fallback: def.fallback,
            overrides: HashMap::new(),
        });
        entry.overrides.insert(backend, implementation);
    }

    /// Resolves the callable for `func` under `backend`.
    pub fn resolve(&self, func: &Symbol, backend: &dyn Backend) -> Result<NativeFn, SigilError> {
        let funcs = self.funcs.read().expect("registry lock poisoned");
        let entry = funcs.get(func);

        if let Some(implementation) = entry.and_then(|e| e.overrides.get(&backend.id())) {
            return Ok(*implementation);
        }
        if let Some(implementation) = backend.lookup(&func.qualified()) {
            return Ok(implementation);
        }
        if let Some(fallback) = entry.and_then(|e| e.fallback) {
            return Ok(fallback);
        }
        Err(SigilError::no_implementation(func.qualified(), backend.name()))
    }

    /// The arity declared for `func`, if any.
    pub fn declared_arity(&self, func: &Symbol) -> Option<usize> {
        let funcs = self.funcs.read().expect("registry lock poisoned");
        funcs.get(func).and_then(|entry| entry.arity)
    }

    /// Every defined function reference, for inspection.
    pub fn list(&self) -> Vec<Symbol> {
        let funcs = self.funcs.read().expect("registry lock poisoned");
        funcs.keys().cloned().collect()
    }
}
