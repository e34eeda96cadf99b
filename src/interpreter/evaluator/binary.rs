use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a binary arithmetic operation on two integers.
///
/// # Errors
/// Returns `RuntimeError::Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use parsum::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// assert_eq!(eval_binary_op(BinaryOperator::Sub, 17, 13).unwrap(), 4);
/// assert!(eval_binary_op(BinaryOperator::Add, i64::MAX, 1).is_err());
/// ```
pub fn eval_binary_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
    };

    result.ok_or(RuntimeError::Overflow { op, left, right })
}
