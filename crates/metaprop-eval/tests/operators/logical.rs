//! Logical Combinator Tests
//!
//! Tests for: not, and, or
//! Combinators have no domain check of their own; negation inverts fail-soft verdicts.

use metaprop_eval::{Evaluator, OperatorExpr, OperatorRegistry, Predicate};
use metaprop_types::Value;
use pretty_assertions::assert_eq;

fn registry() -> &'static OperatorRegistry {
    OperatorRegistry::standard()
}

#[test]
fn test_not_less_than_on_text_is_true() {
    let not_lt = registry().resolve_str("not:lt").unwrap();
    assert!(not_lt.evaluate(&Value::text("x"), &Value::Integer(1)));
}

#[test]
fn test_not_less_than_on_equal_numbers() {
    let not_lt = registry().resolve_str("not:lt").unwrap();
    assert!(not_lt.evaluate(&Value::Integer(3), &Value::Real(3.0)));
    assert!(!not_lt.evaluate(&Value::Integer(2), &Value::Real(2.5)));
}

#[test]
fn test_not_size_eq_on_unsized_is_true() {
    let predicate = registry()
        .resolve_expr(&OperatorExpr::not(OperatorExpr::named("size_eq")))
        .unwrap();
    assert!(predicate.evaluate(&Value::Integer(5), &Value::Integer(5)));
}

#[test]
fn test_double_negation() {
    let lt = registry().resolve("lt").unwrap();
    let not_not_lt = registry().resolve_str("not:not:lt").unwrap();
    let pairs = [
        (Value::Integer(1), Value::Integer(2)),
        (Value::Integer(2), Value::Integer(1)),
        (Value::text("x"), Value::Integer(1)),
        (Value::Absent, Value::Absent),
    ];
    for (left, right) in &pairs {
        assert_eq!(not_not_lt.evaluate(left, right), lt.evaluate(left, right));
    }
}

#[test]
fn test_and_sees_same_operands() {
    // Both clauses get the same right operand, so ge and le only meet at equality
    let predicate = registry()
        .resolve_expr(&OperatorExpr::and(
            OperatorExpr::named("ge"),
            OperatorExpr::named("le"),
        ))
        .unwrap();
    assert!(predicate.evaluate(&Value::Integer(5), &Value::Integer(5)));
    assert!(!predicate.evaluate(&Value::Integer(5), &Value::Integer(6)));
}

#[test]
fn test_or_mixes_families() {
    // Either the text is short or, for numbers, below the bound
    let predicate = registry()
        .resolve_expr(&OperatorExpr::or(
            OperatorExpr::named("size_lt"),
            OperatorExpr::named("lt"),
        ))
        .unwrap();
    assert!(predicate.evaluate(&Value::text("ab"), &Value::Integer(3)));
    assert!(predicate.evaluate(&Value::Integer(2), &Value::Integer(3)));
    assert!(!predicate.evaluate(&Value::Boolean(true), &Value::Integer(3)));
}

#[test]
fn test_combinators_compose_with_builders() {
    let built = Predicate::less_than().negate().and(Predicate::size_equal().negate());
    let resolved = registry()
        .resolve_expr(&serde_json::from_str(r#"{"and": [{"not": "lt"}, {"not": "size_eq"}]}"#).unwrap())
        .unwrap();
    assert_eq!(built.to_string(), resolved.to_string());
    assert_eq!(
        built.evaluate(&Value::text("abc"), &Value::Integer(2)),
        resolved.evaluate(&Value::text("abc"), &Value::Integer(2))
    );
}

#[test]
fn test_not_operator_trait() {
    let predicate = !Predicate::greater_than();
    assert!(predicate.evaluate(&Value::Integer(1), &Value::Integer(1)));
}
