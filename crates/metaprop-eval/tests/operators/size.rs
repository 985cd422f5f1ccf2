//! Size Operator Tests
//!
//! Tests for: size_eq, size_gt, size_lt, size_ge, size_le
//! Text is sized by characters, sequences by elements; the bound must be numeric.

use metaprop_eval::{Evaluator, OperatorRegistry};
use metaprop_types::Value;
use rstest::rstest;

fn eval(operator: &str, left: Value, right: Value) -> bool {
    OperatorRegistry::standard()
        .resolve(operator)
        .unwrap()
        .evaluate(&left, &right)
}

#[test]
fn test_size_eq_text() {
    assert!(eval("size_eq", Value::text("hello"), Value::Integer(5)));
    assert!(!eval("size_eq", Value::text("hello"), Value::Integer(4)));
}

#[test]
fn test_size_eq_sequence() {
    assert!(eval("size_eq", Value::sequence([1, 2, 3]), Value::Integer(3)));
    assert!(eval("size_eq", Value::Sequence(vec![]), Value::Integer(0)));
}

#[test]
fn test_size_eq_integer_left_is_false() {
    assert!(!eval("size_eq", Value::Integer(5), Value::Integer(5)));
}

#[test]
fn test_size_counts_unicode_characters() {
    assert!(eval("size_eq", Value::text("日本語"), Value::Integer(3)));
}

#[test]
fn test_size_real_bound_truncated() {
    assert!(eval("size_eq", Value::text("hello"), Value::Real(5.7)));
    assert!(eval("size_lt", Value::text("hello"), Value::Real(6.2)));
}

#[rstest]
#[case("size_gt", 2, true)]
#[case("size_gt", 3, false)]
#[case("size_lt", 4, true)]
#[case("size_lt", 3, false)]
#[case("size_ge", 3, true)]
#[case("size_le", 3, true)]
#[case("size_le", 2, false)]
fn test_size_siblings(#[case] operator: &str, #[case] bound: i64, #[case] expected: bool) {
    assert_eq!(eval(operator, Value::text("abc"), Value::Integer(bound)), expected);
    assert_eq!(eval(operator, Value::sequence(["a", "b", "c"]), Value::Integer(bound)), expected);
}

#[rstest]
#[case(Value::Integer(5))]
#[case(Value::Real(5.0))]
#[case(Value::Boolean(true))]
#[case(Value::Absent)]
fn test_unsized_left_is_false(#[case] left: Value) {
    for operator in ["size_eq", "size_gt", "size_lt", "size_ge", "size_le"] {
        assert!(!eval(operator, left.clone(), Value::Integer(5)));
    }
}

#[rstest]
#[case(Value::text("5"))]
#[case(Value::Boolean(true))]
#[case(Value::Absent)]
#[case(Value::sequence([5]))]
fn test_non_numeric_bound_is_false(#[case] bound: Value) {
    assert!(!eval("size_eq", Value::text("hello"), bound.clone()));
    assert!(!eval("size_ge", Value::text("hello"), bound));
}
