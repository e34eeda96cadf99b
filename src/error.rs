/// Lexing errors.
///
/// Raised while splitting the source into tokens, before any grammar is
/// applied.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression tree
/// from tokens: empty input, unmatched parentheses, unexpected tokens and
/// literals that do not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating an expression
/// tree.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure of the lex, parse and evaluate pipeline.
///
/// Each phase has its own error type; this enum lets `?` carry them through
/// [`crate::get_result`] while keeping the phase visible to callers.
pub enum Error {
    /// The source contained a character outside the alphabet.
    Lex(LexError),
    /// The tokens did not form a valid expression.
    Parse(ParseError),
    /// The expression could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Gets the byte offset in the source where the failure was detected.
    ///
    /// Runtime errors belong to a tree rather than to a source position and
    /// return `None`.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(_) => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
