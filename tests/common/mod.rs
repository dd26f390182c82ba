//! Shared fixtures for integration tests: a recording notice sink and a few
//! toy backends exercising the dispatch boundary.

#![allow(dead_code)]

use sigil::ast::{Symbol, Value};
use sigil::runtime::std_math::{self, StdMath};
use sigil::{Backend, BackendId, NativeFn, NoticeSink, SigilError};

/// Captures notices so tests can assert on the side channel.
#[derive(Default)]
pub struct RecordingSink {
    pub notices: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoticeSink for RecordingSink {
    fn emit(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }
}

fn one_number(args: &[Value], operation: &str) -> Result<f64, SigilError> {
    match args {
        [Value::Number(n)] => Ok(*n),
        _ => Err(SigilError::MalformedNode {
            message: format!("'{}' expects one number", operation),
        }),
    }
}

/// Cosine over degrees instead of radians.
pub const DEGREES_COS: NativeFn = |args| {
    let n = one_number(args, "scalar.cos")?;
    Ok(Value::Number(n.to_radians().cos()))
};

/// A backend that disagrees with std-math about `scalar.cos` (degrees, not
/// radians) and delegates everything else.
pub struct DegreesMath {
    id: BackendId,
}

impl DegreesMath {
    pub fn new() -> Self {
        DegreesMath {
            id: BackendId::mint(),
        }
    }
}

impl Backend for DegreesMath {
    fn id(&self) -> BackendId {
        self.id
    }

    fn name(&self) -> &str {
        "degrees-math"
    }

    fn lookup(&self, name: &str) -> Option<NativeFn> {
        if name == "scalar.cos" {
            Some(DEGREES_COS)
        } else {
            StdMath.lookup(name)
        }
    }

    fn lookup_value(&self, name: &str) -> Option<Value> {
        StdMath.lookup_value(name)
    }
}

/// A backend with a symbolic-value constructor: free names evaluate to
/// residual placeholders instead of failing.
pub struct SymbolicMath {
    id: BackendId,
}

impl SymbolicMath {
    pub fn new() -> Self {
        SymbolicMath {
            id: BackendId::mint(),
        }
    }
}

impl Backend for SymbolicMath {
    fn id(&self) -> BackendId {
        self.id
    }

    fn name(&self) -> &str {
        "symbolic-math"
    }

    fn lookup(&self, name: &str) -> Option<NativeFn> {
        StdMath.lookup(name)
    }

    fn lookup_value(&self, name: &str) -> Option<Value> {
        StdMath.lookup_value(name)
    }

    fn make_symbol(&self, name: &str) -> Option<Value> {
        Some(Value::Symbolic(Symbol::new(name)))
    }
}

/// A deliberately partial backend: addition is the only thing it knows.
pub struct AddOnly {
    id: BackendId,
}

impl AddOnly {
    pub fn new() -> Self {
        AddOnly {
            id: BackendId::mint(),
        }
    }
}

impl Backend for AddOnly {
    fn id(&self) -> BackendId {
        self.id
    }

    fn name(&self) -> &str {
        "add-only"
    }

    fn lookup(&self, name: &str) -> Option<NativeFn> {
        if name == "add" {
            Some(std_math::NATIVE_ADD)
        } else {
            None
        }
    }
}
