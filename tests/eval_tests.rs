//! Evaluator tests: operator dispatch through the backend namespace,
//! catalog calls, partial backends, symbolic placeholders, the recursion
//! guard, and the default-backend notice.

mod common;

use common::{AddOnly, DegreesMath, RecordingSink, SymbolicMath};
use sigil::ast::{Expr, Value};
use sigil::{
    eval, eval_default_into, scalar, vector, EvalOptions, FunctionRegistry, SigilError, StdMath,
};

fn x() -> Expr {
    Expr::symbol("x")
}

#[test]
fn arithmetic_reduces_to_a_number() {
    let tree = (Expr::literal(5.0) + Expr::literal(3.0) * Expr::literal(2.0)) / Expr::literal(11.0);
    let value = eval(&tree, &StdMath, &EvalOptions::default()).expect("closed tree");
    assert_eq!(value.as_number(), Some(1.0));
}

#[test]
fn power_modulo_and_negation_dispatch_by_name() {
    let opts = EvalOptions::default();
    let pow = Expr::literal(2.0).pow(10.0);
    assert_eq!(eval(&pow, &StdMath, &opts).unwrap().as_number(), Some(1024.0));

    let rem = Expr::literal(7.0) % 3.0;
    assert_eq!(eval(&rem, &StdMath, &opts).unwrap().as_number(), Some(1.0));

    let neg = -Expr::literal(4.0);
    assert_eq!(eval(&neg, &StdMath, &opts).unwrap().as_number(), Some(-4.0));
}

#[test]
fn comparisons_and_boolean_operators_yield_bools() {
    let opts = EvalOptions::default();
    let cmp = Expr::literal(1.0).lt(2.0) & Expr::literal(3.0).ge(3.0);
    assert_eq!(eval(&cmp, &StdMath, &opts).unwrap().as_bool(), Some(true));

    let inverted = !Expr::literal(false);
    assert_eq!(eval(&inverted, &StdMath, &opts).unwrap().as_bool(), Some(true));
}

#[test]
fn boolean_operator_on_a_number_is_a_type_mismatch() {
    let tree = Expr::literal(true) & Expr::literal(1.0);
    let err = eval(&tree, &StdMath, &EvalOptions::default()).expect_err("1 is not a bool");
    assert!(
        matches!(err, SigilError::TypeMismatch { ref operation, .. } if operation == "and"),
        "got {err:?}"
    );
}

#[test]
fn catalog_calls_reach_the_backend_implementation() {
    let tree = scalar::cos(Expr::literal(0.5)) * 3.0;
    let value = eval(&tree, &StdMath, &EvalOptions::default()).expect("closed tree");
    assert_eq!(value.as_number(), Some(0.5f64.cos() * 3.0));
}

#[test]
fn switching_backends_never_requires_rebuilding_the_tree() {
    let tree = scalar::cos(Expr::literal(0.5)) * 3.0;
    let opts = EvalOptions::default();

    let std_value = eval(&tree, &StdMath, &opts).expect("std-math has cos");
    let deg_value = eval(&tree, &DegreesMath::new(), &opts).expect("degrees-math has cos");

    assert_eq!(std_value.as_number(), Some(0.5f64.cos() * 3.0));
    assert_eq!(deg_value.as_number(), Some(0.5f64.to_radians().cos() * 3.0));
    assert_ne!(std_value, deg_value, "the two backends disagree about cos");
}

#[test]
fn catalog_constants_resolve_through_the_backend() {
    let tree = scalar::pi() / 2.0;
    let value = eval(&tree, &StdMath, &EvalOptions::default()).expect("pi is exposed");
    assert_eq!(value.as_number(), Some(std::f64::consts::PI / 2.0));
}

#[test]
fn tuples_evaluate_elementwise_into_lists() {
    let tree = Expr::tuple([Expr::literal(1.0), Expr::literal(2.0) + Expr::literal(3.0)]);
    let value = eval(&tree, &StdMath, &EvalOptions::default()).expect("closed tree");
    assert_eq!(
        value,
        Value::List(vec![Value::Number(1.0), Value::Number(5.0)])
    );
}

#[test]
fn vector_reductions_run_over_evaluated_tuples() {
    let tree = vector::sum(Expr::tuple([
        Expr::literal(1.0),
        Expr::literal(2.0),
        Expr::literal(3.0),
    ]));
    let value = eval(&tree, &StdMath, &EvalOptions::default()).expect("closed tree");
    assert_eq!(value.as_number(), Some(6.0));
}

#[test]
fn free_name_without_symbolic_support_is_unbound() {
    let err = eval(&x(), &StdMath, &EvalOptions::default()).expect_err("std-math has no symbols");
    assert!(
        matches!(err, SigilError::UnboundName { ref name, .. } if name == "x"),
        "got {err:?}"
    );
}

#[test]
fn free_name_with_symbolic_support_becomes_a_placeholder() {
    let value =
        eval(&x(), &SymbolicMath::new(), &EvalOptions::default()).expect("symbolic backend");
    assert!(value.is_symbolic(), "expected a placeholder, got {value:?}");
    assert_eq!(value.to_string(), "x");
}

#[test]
fn partial_backends_reject_missing_operators() {
    let backend = AddOnly::new();
    let opts = EvalOptions::default();

    let supported = Expr::literal(1.0) + Expr::literal(2.0);
    assert_eq!(eval(&supported, &backend, &opts).unwrap().as_number(), Some(3.0));

    let unsupported = Expr::literal(1.0) * Expr::literal(2.0);
    let err = eval(&unsupported, &backend, &opts).expect_err("add-only has no mul");
    assert!(
        matches!(err, SigilError::UnsupportedOperation { ref name, .. } if name == "mul"),
        "got {err:?}"
    );

    let constant = scalar::pi();
    let err = eval(&constant, &backend, &opts).expect_err("add-only has no constants");
    assert!(matches!(err, SigilError::UnsupportedOperation { .. }));
}

#[test]
fn default_path_emits_exactly_one_notice_per_call() {
    let mut sink = RecordingSink::new();
    let opts = EvalOptions::default();
    let tree = Expr::literal(2.0) + Expr::literal(2.0);

    let value = eval_default_into(&tree, &mut sink, &opts).expect("closed tree");
    assert_eq!(value.as_number(), Some(4.0));
    assert_eq!(sink.notices.len(), 1, "one call, one notice");

    eval_default_into(&tree, &mut sink, &opts).expect("closed tree");
    assert_eq!(sink.notices.len(), 2, "a second call emits a second notice");
    assert!(sink.notices[0].contains("no backend supplied"));
}

#[test]
fn default_path_can_be_silenced_with_the_null_sink() {
    let tree = Expr::literal(1.0) + Expr::literal(2.0);
    let value = eval_default_into(&tree, &mut sigil::NullSink, &EvalOptions::default())
        .expect("closed tree");
    assert_eq!(value.as_number(), Some(3.0));
}

#[test]
fn explicit_backend_path_emits_no_notice() {
    // eval() has no sink at all; the notice belongs only to the defaulting
    // wrapper. This test pins the API shape.
    let tree = Expr::literal(2.0) + Expr::literal(2.0);
    let value = eval(&tree, &StdMath, &EvalOptions::default()).expect("closed tree");
    assert_eq!(value.as_number(), Some(4.0));
}

#[test]
fn recursion_guard_trips_on_degenerate_depth() {
    let mut tree = x();
    for _ in 0..40 {
        tree = tree + 1.0;
    }
    let opts = EvalOptions {
        max_depth: 16,
        registry: FunctionRegistry::new(),
    };
    let err = eval(&tree, &SymbolicMath::new(), &opts).expect_err("40 levels, limit 16");
    assert!(
        matches!(err, SigilError::RecursionLimit { limit: 16 }),
        "got {err:?}"
    );
}
