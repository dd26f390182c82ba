//! Sigil error handling.
//!
//! One public error type covers every failure the engine can report:
//! substitution failures (cyclic bindings), evaluation failures (unbound
//! names, missing backend capabilities, missing function implementations),
//! and structural failures (malformed nodes, the recursion guard).
//!
//! Errors are plain data. They carry no source spans: expressions are built
//! through the host API, never parsed from text, so there is no source to
//! point back into. Diagnostic codes and help text still flow through
//! [`miette`] so embedding applications get uniform reporting.

use miette::Diagnostic;
use thiserror::Error;

/// Every error the engine can produce.
///
/// All variants are reported to the immediate caller of the failing
/// operation. Nothing is retried and no partial tree or value is ever
/// returned alongside an error.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[diagnostic(url(docsrs))]
pub enum SigilError {
    /// The dependency graph among a batch of bindings is not a DAG.
    #[error("cyclic bindings among: {}", .names.join(", "))]
    #[diagnostic(code(sigil::subst::cycle))]
    Cycle {
        /// Names of the bindings participating in the cycle.
        names: Vec<String>,
        #[help]
        help: Option<String>,
    },

    /// Evaluation reached a free name and the backend cannot represent
    /// symbolic values.
    #[error("unbound name '{name}': backend '{backend}' has no symbolic values")]
    #[diagnostic(code(sigil::eval::unbound_name))]
    UnboundName { name: String, backend: String },

    /// The backend namespace does not expose a callable (or constant) under
    /// the required fixed name.
    #[error("'{name}' is not supported by backend '{backend}'")]
    #[diagnostic(code(sigil::eval::unsupported_operation))]
    UnsupportedOperation { name: String, backend: String },

    /// A named function has neither a backend-specific implementation nor a
    /// fallback.
    #[error("no implementation for function '{name}' under backend '{backend}'")]
    #[diagnostic(code(sigil::registry::no_implementation))]
    NoImplementation {
        name: String,
        backend: String,
        #[help]
        help: Option<String>,
    },

    /// A structurally invalid node reached a component (e.g. a call whose
    /// argument count contradicts the function's declared arity). This is a
    /// programmer error, not expected in normal operation.
    #[error("malformed node: {message}")]
    #[diagnostic(code(sigil::eval::malformed_node))]
    MalformedNode { message: String },

    /// A native implementation received a value of the wrong variant.
    #[error("type mismatch in '{operation}': expected {expected}, got {actual}")]
    #[diagnostic(code(sigil::eval::type_mismatch))]
    TypeMismatch {
        operation: String,
        expected: String,
        actual: String,
    },

    /// The evaluation depth guard tripped.
    #[error("recursion limit of {limit} exceeded during evaluation")]
    #[diagnostic(code(sigil::eval::recursion_limit))]
    RecursionLimit { limit: usize },
}

impl SigilError {
    /// Constructs a cycle error from the participating binding names.
    pub fn cycle(names: Vec<String>) -> Self {
        SigilError::Cycle {
            names,
            help: Some("break the cycle by removing or rewriting one of the bindings".into()),
        }
    }

    /// Constructs a no-implementation error for a function under a backend.
    pub fn no_implementation(name: impl Into<String>, backend: impl Into<String>) -> Self {
        SigilError::NoImplementation {
            name: name.into(),
            backend: backend.into(),
            help: Some(
                "register a backend-specific implementation or define the function \
                 with a fallback"
                    .into(),
            ),
        }
    }

    /// Stable category label, used in reporting and assertions.
    pub const fn category(&self) -> &'static str {
        match self {
            SigilError::Cycle { .. } => "subst",
            SigilError::UnboundName { .. }
            | SigilError::UnsupportedOperation { .. }
            | SigilError::TypeMismatch { .. }
            | SigilError::RecursionLimit { .. } => "eval",
            SigilError::NoImplementation { .. } => "registry",
            SigilError::MalformedNode { .. } => "internal",
        }
    }
}
