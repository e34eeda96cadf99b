use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Arithmetic operation overflowed.
    Overflow {
        /// The operator that overflowed.
        op:    BinaryOperator,
        /// Value of the left operand.
        left:  i64,
        /// Value of the right operand.
        right: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { op, left, right } => write!(f,
                                                         "Error: Integer overflow while trying to compute {left} {op} {right}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
