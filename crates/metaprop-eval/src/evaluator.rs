//! The evaluator capability shared by every predicate

use metaprop_types::Value;
use std::fmt;

/// A pure, two-operand predicate.
///
/// Implementations must not fail and must not have side effects. Operand
/// shapes outside the evaluator's domain yield `false`.
pub trait Evaluator: Send + Sync {
    /// Evaluate the predicate against a pair of operands
    fn evaluate(&self, left: &Value, right: &Value) -> bool;
}

/// Adapter turning a plain function or closure into an [`Evaluator`]
#[derive(Clone, Copy)]
pub struct FnEvaluator<F>(pub F);

impl<F> Evaluator for FnEvaluator<F>
where
    F: Fn(&Value, &Value) -> bool + Send + Sync,
{
    fn evaluate(&self, left: &Value, right: &Value) -> bool {
        (self.0)(left, right)
    }
}

impl<F> fmt::Debug for FnEvaluator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnEvaluator")
    }
}
