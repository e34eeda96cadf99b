use crate::interpreter::parser::MAX_NESTING_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The token sequence, or the inside of a `()` group, was empty.
    EmptyInput {
        /// Byte offset where an expression was expected.
        position: usize,
    },
    /// A parenthesis has no partner within scope.
    UnmatchedParenthesis {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// Parentheses were nested deeper than the parser accepts.
    NestingTooDeep {
        /// Byte offset of the first parenthesis past the limit.
        position: usize,
    },
    /// Found a token where the grammar cannot accept it.
    UnexpectedToken {
        /// The text of the token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// An operator was the last token of its expression.
    UnexpectedEndOfInput {
        /// Byte offset of the dangling operator.
        position: usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// The literal text.
        token:    String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Gets the byte offset where parsing failed.
    ///
    /// ## Example
    /// ```
    /// use parsum::error::ParseError;
    ///
    /// let error = ParseError::UnmatchedParenthesis { position: 4 };
    /// assert_eq!(error.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyInput { position }
            | Self::UnmatchedParenthesis { position }
            | Self::NestingTooDeep { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput { position } => {
                write!(f, "Error at position {position}: Empty expression.")
            },

            Self::UnmatchedParenthesis { position } => {
                write!(f, "Error at position {position}: Unmatched parenthesis.")
            },

            Self::NestingTooDeep { position } => write!(f,
                                                        "Error at position {position}: Parentheses are nested more than {MAX_NESTING_DEPTH} levels deep."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => write!(f,
                                                              "Error at position {position}: Expected an operand after the operator but the expression ended."),

            Self::LiteralTooLarge { token, position } => {
                write!(f, "Error at position {position}: Literal {token} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
