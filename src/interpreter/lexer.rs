use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// `TokenKind` is the closed alphabet recognized by the lexer. Whitespace
/// between tokens is skipped; every other character outside the alphabet is
/// reported as a [`LexError`].
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    ///
    /// A digit run is always emitted as a single token, including one that
    /// reaches the end of the input.
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::LParen => "lparen",
            Self::RParen => "rparen",
        };
        write!(f, "{name}")
    }
}

/// Represents a lexical token in the source input.
///
/// A token pairs its [`TokenKind`] with the exact source text it was read from
/// and the byte offset of its first character. Tokens are immutable and only
/// related to each other by their order in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source substring of the token.
    pub text:     String,
    /// Byte offset of the token in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token from its parts.
    ///
    /// ## Example
    /// ```
    /// use parsum::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Integer, "13", 1);
    /// assert_eq!(token.text, "13");
    /// assert_eq!(token.position, 1);
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' @{}", self.kind, self.text, self.position)
    }
}

/// Splits `source` into an ordered sequence of tokens.
///
/// The scan is a single left-to-right pass. Operators and parentheses become
/// one-character tokens; a contiguous run of digits becomes one `Integer`
/// token. Whitespace is skipped.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first character that is
/// neither whitespace, a digit, `+`, `-`, `(` nor `)`.
///
/// # Example
/// ```
/// use parsum::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("(13+4)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::LParen, TokenKind::Integer, TokenKind::Plus, TokenKind::Integer,
///             TokenKind::RParen]);
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;

        let Ok(kind) = kind else {
            let character = source[position..].chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character, position });
        };

        let text = lexer.slice();
        tracing::trace!(%kind, text, position, "token");
        tokens.push(Token::new(kind, text, position));
    }

    tracing::debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn operators_and_parens_are_single_characters() {
        use TokenKind::{LParen, Minus, Plus, RParen};
        assert_eq!(kinds("+-()"), [Plus, Minus, LParen, RParen]);
    }

    #[test]
    fn digit_runs_become_one_token() {
        let tokens = lex("(13+4)-(12+1)").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["(", "13", "+", "4", ")", "-", "(", "12", "+", "1", ")"]);
    }

    #[test]
    fn trailing_digit_run_is_flushed() {
        let tokens = lex("1+234").unwrap();
        assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Integer, "234", 2)));
    }

    #[test]
    fn single_number() {
        assert_eq!(lex("5").unwrap(), [Token::new(TokenKind::Integer, "5", 0)]);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let positions: Vec<_> = lex("10 + (2)").unwrap().iter().map(|t| t.position).collect();
        assert_eq!(positions, [0, 3, 5, 6, 7]);
    }

    #[test]
    fn whitespace_is_skipped() {
        use TokenKind::{Integer, Minus, Plus};
        assert_eq!(kinds(" 1 +\t2\n- 3 "), [Integer, Plus, Integer, Minus, Integer]);
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex("   ").unwrap().is_empty());
    }

    #[test]
    fn unknown_character_is_rejected() {
        match lex("1*2") {
            Err(LexError::UnexpectedCharacter { character: '*',
                                                position: 1, }) => {},
            other => panic!("expected lex error, got {other:?}"),
        }
    }

    #[test]
    fn non_ascii_character_is_rejected() {
        assert!(matches!(lex("1+٣"),
                         Err(LexError::UnexpectedCharacter { character: '٣',
                                                             position: 2, })));
    }
}
