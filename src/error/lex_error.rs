#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that is not a digit, operator, parenthesis or
    /// whitespace.
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
}

impl LexError {
    /// Gets the byte offset where lexing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at position {position}: Unexpected character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
