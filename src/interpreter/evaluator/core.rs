use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::binary::eval_binary_op,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A pending step of the evaluation walk.
enum Step<'a> {
    /// Evaluate a subtree and push its value.
    Visit(&'a Expr),
    /// Pop the right and left values and push `left op right`.
    Apply(BinaryOperator),
}

/// Evaluates an expression tree to an integer.
///
/// The evaluation is a post-order fold: a literal yields its value, a binary
/// operation applies its operator to the values of its left and right
/// children, and a chain folds its operations left to right. The walk uses an
/// explicit stack, so the depth of the tree never limits it. The tree is only
/// read, so evaluating it again always gives the same result.
///
/// # Errors
/// Returns `RuntimeError::Overflow` if an intermediate result does not fit in
/// an `i64`.
///
/// # Example
/// ```
/// use parsum::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expr::binary(Expr::literal(1),
///                         BinaryOperator::Add,
///                         Expr::binary(Expr::literal(2), BinaryOperator::Sub, Expr::literal(1)));
/// assert_eq!(evaluate(&expr).unwrap(), 2);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    let mut steps = vec![Step::Visit(expr)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Literal { value }) => values.push(*value),
            Step::Visit(Expr::BinaryOp { left, op, right }) => {
                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            },
            Step::Visit(Expr::Chain { first, rest }) => {
                for (op, operand) in rest.iter().rev() {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(operand));
                }
                steps.push(Step::Visit(first));
            },
            Step::Apply(op) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("both operands are visited before their operator")
                };
                values.push(eval_binary_op(op, left, right)?);
            },
        }
    }

    let value = values.pop();
    debug_assert!(values.is_empty());
    Ok(value.unwrap_or_default())
}
