//! Comparison Operator Tests
//!
//! Tests for: lt, gt, le, ge, eq
//! Integer pairs compare exactly; any Real operand promotes the pair to real.

use metaprop_eval::{Evaluator, OperatorRegistry};
use metaprop_types::Value;
use rstest::rstest;

// ============================================================================
// Test Helpers
// ============================================================================

fn eval(operator: &str, left: Value, right: Value) -> bool {
    OperatorRegistry::standard()
        .resolve(operator)
        .unwrap()
        .evaluate(&left, &right)
}

fn int(i: i64) -> Value {
    Value::Integer(i)
}

fn real(r: f64) -> Value {
    Value::Real(r)
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_less_than_integer_equal_real_is_false() {
    assert!(!eval("lt", int(3), real(3.0)));
}

#[test]
fn test_less_than_integer_smaller_real_is_true() {
    assert!(eval("lt", int(2), real(2.5)));
}

#[test]
fn test_equal_across_numeric_kinds() {
    assert!(eval("eq", int(3), real(3.0)));
    assert!(eval("eq", real(3.0), int(3)));
    assert!(!eval("eq", int(3), real(3.000_001)));
}

#[rstest]
#[case("lt", 1, 2, true)]
#[case("lt", 2, 2, false)]
#[case("gt", 3, 2, true)]
#[case("gt", 2, 2, false)]
#[case("le", 2, 2, true)]
#[case("le", 3, 2, false)]
#[case("ge", 2, 2, true)]
#[case("ge", 1, 2, false)]
#[case("eq", -4, -4, true)]
#[case("eq", -4, 4, false)]
fn test_integer_relations(#[case] operator: &str, #[case] left: i64, #[case] right: i64, #[case] expected: bool) {
    assert_eq!(eval(operator, int(left), int(right)), expected);
}

#[rstest]
#[case("lt", 1.5, 2, true)]
#[case("gt", 2.5, 2, true)]
#[case("le", 2.0, 2, true)]
#[case("ge", 1.999, 2, false)]
fn test_mixed_relations(#[case] operator: &str, #[case] left: f64, #[case] right: i64, #[case] expected: bool) {
    assert_eq!(eval(operator, real(left), int(right)), expected);
}

#[test]
fn test_large_integers_compare_exactly() {
    // Both collapse to the same f64, exact comparison still separates them
    let a = int(9_007_199_254_740_993);
    let b = int(9_007_199_254_740_992);
    assert!(eval("gt", a.clone(), b.clone()));
    assert!(!eval("eq", a, b));
}

#[test]
fn test_large_integer_against_real_uses_real() {
    // Widened to real, 2^53 + 1 rounds to 2^53
    assert!(eval("eq", int(9_007_199_254_740_993), real(9_007_199_254_740_992.0)));
}

// ============================================================================
// Fail-soft domain
// ============================================================================

#[rstest]
#[case(Value::text("1"), int(1))]
#[case(int(1), Value::text("1"))]
#[case(Value::Boolean(true), int(1))]
#[case(Value::sequence([1]), int(1))]
#[case(Value::Absent, int(1))]
#[case(int(1), Value::Absent)]
#[case(Value::Absent, Value::Absent)]
fn test_non_numeric_operands_are_false(#[case] left: Value, #[case] right: Value) {
    for operator in ["lt", "gt", "le", "ge", "eq"] {
        assert!(!eval(operator, left.clone(), right.clone()), "{} {} {}", left, operator, right);
    }
}

#[test]
fn test_equal_does_not_compare_text() {
    // eq is an order relation over numbers, not structural equality
    assert!(!eval("eq", Value::text("a"), Value::text("a")));
}

#[test]
fn test_nan_never_compares() {
    for operator in ["lt", "gt", "le", "ge", "eq"] {
        assert!(!eval(operator, real(f64::NAN), real(f64::NAN)));
    }
}
