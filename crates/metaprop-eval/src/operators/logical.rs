//! Logical combinators
//!
//! Implements: not, and, or
//!
//! Combinators have no domain of their own. They hand the same operand pair
//! to the wrapped evaluators and recompose the verdicts, so `not` over an
//! inapplicable comparison is `true`.

use crate::evaluator::Evaluator;
use metaprop_types::Value;

/// Invert the verdict of `inner`
pub fn eval_not(inner: &dyn Evaluator, left: &Value, right: &Value) -> bool {
    !inner.evaluate(left, right)
}

/// Conjunction of two evaluators
///
/// | A     | B     | A and B |
/// |-------|-------|---------|
/// | true  | true  | true    |
/// | true  | false | false   |
/// | false | -     | false   |
pub fn eval_and(first: &dyn Evaluator, second: &dyn Evaluator, left: &Value, right: &Value) -> bool {
    first.evaluate(left, right) && second.evaluate(left, right)
}

/// Disjunction of two evaluators
///
/// | A     | B     | A or B |
/// |-------|-------|--------|
/// | true  | -     | true   |
/// | false | true  | true   |
/// | false | false | false  |
pub fn eval_or(first: &dyn Evaluator, second: &dyn Evaluator, left: &Value, right: &Value) -> bool {
    first.evaluate(left, right) || second.evaluate(left, right)
}
