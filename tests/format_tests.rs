//! Formatter tests: minimal parenthesization under the fixed precedence
//! table, and operand-order preservation for mixed plain-value/expression
//! construction.

use sigil::ast::builder::{eq, lt};
use sigil::ast::Expr;
use sigil::{scalar, vector};

fn x() -> Expr {
    Expr::symbol("x")
}

fn y() -> Expr {
    Expr::symbol("y")
}

fn z() -> Expr {
    Expr::symbol("z")
}

#[test]
fn multiplication_inside_addition_needs_no_parentheses() {
    let e = x() + 3.0 * y();
    assert_eq!(e.to_string(), "x + 3 * y");
}

#[test]
fn addition_inside_multiplication_is_parenthesized() {
    let e = (x() + 3.0) * y();
    assert_eq!(e.to_string(), "(x + 3) * y");
}

#[test]
fn left_nested_subtraction_drops_parentheses() {
    let e = (x() - y()) - z();
    assert_eq!(e.to_string(), "x - y - z");
}

#[test]
fn right_nested_subtraction_keeps_parentheses() {
    let e = x() - (y() - z());
    assert_eq!(e.to_string(), "x - (y - z)");
}

#[test]
fn division_groups_like_subtraction() {
    assert_eq!((x() / y() / z()).to_string(), "x / y / z");
    assert_eq!((x() / (y() / z())).to_string(), "x / (y / z)");
    assert_eq!((x() * (y() / z())).to_string(), "x * (y / z)");
}

#[test]
fn power_is_right_associative() {
    assert_eq!(x().pow(y().pow(z())).to_string(), "x ** y ** z");
    assert_eq!(x().pow(y()).pow(z()).to_string(), "(x ** y) ** z");
}

#[test]
fn unary_negation_binds_between_power_and_multiplication() {
    assert_eq!((-(x() + y())).to_string(), "-(x + y)");
    assert_eq!(((-x()) * y()).to_string(), "-x * y");
    assert_eq!((-x().pow(2.0)).to_string(), "-x ** 2");
    assert_eq!((-x()).pow(2.0).to_string(), "(-x) ** 2");
    assert_eq!((-(-x())).to_string(), "-(-x)");
}

#[test]
fn comparisons_are_non_associative() {
    let e = eq(lt(x(), y()), z());
    assert_eq!(e.to_string(), "(x < y) == z");
}

#[test]
fn boolean_operators_rank_below_comparisons() {
    let e = x().lt(y()) & y().lt(z());
    assert_eq!(e.to_string(), "x < y & y < z");
    let grouped = x() & (y() | z());
    assert_eq!(grouped.to_string(), "x & (y | z)");
    let flat = x() & y() | z();
    assert_eq!(flat.to_string(), "x & y | z");
}

#[test]
fn plain_left_operand_keeps_its_side() {
    // A plain number on the left must never swap with the symbolic right
    // operand.
    let e = 2.0 - x();
    assert_eq!(e.to_string(), "2 - x");
    let e = 10i64 / x();
    assert_eq!(e.to_string(), "10 / x");
}

#[test]
fn calls_render_qualified_with_bare_arguments() {
    let e = scalar::cos(x() + 1.0);
    assert_eq!(e.to_string(), "scalar.cos(x + 1)");
    let e = scalar::atan2(x(), y() * 2.0);
    assert_eq!(e.to_string(), "scalar.atan2(x, y * 2)");
}

#[test]
fn constants_render_with_their_namespace() {
    let e = x() + scalar::pi();
    assert_eq!(e.to_string(), "x + scalar.pi");
}

#[test]
fn tuples_render_with_commas() {
    let pair = Expr::tuple([x(), Expr::literal(2.0)]);
    assert_eq!(pair.to_string(), "(x, 2)");
    let single = Expr::tuple([x()]);
    assert_eq!(single.to_string(), "(x,)");
    assert_eq!(vector::sum(pair).to_string(), "vector.sum((x, 2))");
}

#[test]
fn integral_numbers_print_without_decimal_point() {
    assert_eq!(Expr::literal(3.0).to_string(), "3");
    assert_eq!(Expr::literal(0.5).to_string(), "0.5");
    assert_eq!((x() % 2.0).to_string(), "x % 2");
}
