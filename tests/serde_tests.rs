//! Persisted-form tests: every tree shape must survive a trip through the
//! tagged-union JSON form and come back structurally identical.

use sigil::ast::{self, Expr, Symbol, Value};
use sigil::{scalar, vector};

fn round_trip(tree: &Expr) -> Expr {
    let json = ast::to_json(tree).expect("serialization cannot fail for trees");
    ast::from_json(&json).expect("persisted form reconstructs the tree")
}

#[test]
fn operator_trees_round_trip() {
    let tree = Expr::symbol("x") + 3.0 * Expr::symbol("y");
    assert_eq!(round_trip(&tree), tree);

    let tree = (-Expr::symbol("x")).pow(2.0) % 5.0;
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn calls_and_tuples_round_trip() {
    let tree = vector::sum(Expr::tuple([
        Expr::symbol("x"),
        scalar::cos(Expr::literal(0.5)),
        Expr::literal(2.0) + Expr::literal(3.0),
    ]));
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn namespaced_symbols_round_trip() {
    let tree = Expr::Symbol(Symbol::namespaced("unit", "x")) + scalar::pi();
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn literal_payloads_round_trip() {
    let tree = Expr::Literal(Value::List(vec![
        Value::Number(1.5),
        Value::Bool(false),
        Value::Symbolic(Symbol::new("t")),
    ]));
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn persisted_form_is_a_tagged_union() {
    let json = ast::to_json(&Expr::symbol("x")).expect("serializable");
    assert!(
        json.contains("Symbol"),
        "variant tag must appear in the form: {json}"
    );
}
