use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is fully evaluated before the right one, so the first
    /// undeclared name from the left is the one reported.
    pub(super) fn eval_binary_op(&self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        Ok(apply_binary(op, left, right))
    }
}

/// Applies a binary operator to two values.
///
/// # Example
/// ```
/// use pushkin::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Add, 10.0, 20.0), 30.0);
/// assert_eq!(apply_binary(BinaryOperator::Sub, 5.0, 20.0), -15.0);
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
    }
}
