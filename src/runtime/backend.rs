//! The backend boundary.
//!
//! A backend is an opaque namespace: a lookup surface from fixed operator
//! and function names to callables, plus optional constant and symbolic
//! value constructors. The core never owns or caches a backend; one is
//! supplied per evaluation call. Partial backends are legal, they just
//! narrow which expressions they can evaluate.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ast::Value;
use crate::errors::SigilError;

/// A native implementation of an operator or named function.
pub type NativeFn = fn(&[Value]) -> Result<Value, SigilError>;

/// Opaque backend identity used by the function registry.
///
/// Identity is the token, not the backend's display name: two
/// differently-named backends never share an id, and neither do two
/// instances of the same backend type unless they share the token
/// deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendId(u64);

impl BackendId {
    /// Mints a fresh, process-unique identity.
    pub fn mint() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        BackendId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Capability interface every backend implements.
pub trait Backend {
    /// Identity for registry lookups. Must be stable for the lifetime of
    /// the backend instance.
    fn id(&self) -> BackendId;

    /// Display name, used only in error messages.
    fn name(&self) -> &str;

    /// The callable behind a fixed operator name (`"add"`, `"neg"`, …) or a
    /// qualified function name (`"scalar.cos"`), if this backend has one.
    fn lookup(&self, name: &str) -> Option<NativeFn>;

    /// The value behind a qualified constant name (`"scalar.pi"`), if this
    /// backend has one.
    fn lookup_value(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }

    /// Constructs a backend-native symbolic placeholder for a free name.
    /// Returning `None` (the default) makes every free-variable evaluation
    /// fail with an unbound-name error.
    fn make_symbol(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }
}
