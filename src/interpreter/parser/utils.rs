use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Pairs every `(` with its `)` in a single pass over the tokens.
///
/// A stack of open positions is kept; each `)` closes the most recent `(`.
/// The result has one slot per token, holding the index of the matching `)`
/// for each `(` and `None` elsewhere, so the parser resolves any group in
/// constant time however deeply it is nested.
///
/// # Errors
/// - `UnmatchedParenthesis` at a `)` that has no opener, or at the first
///   `(` still open when the tokens run out.
/// - `NestingTooDeep` at the first `(` that opens more than
///   [`MAX_NESTING_DEPTH`] groups at once.
pub(in crate::interpreter::parser) fn match_parentheses(tokens: &[Token])
                                                        -> ParseResult<Vec<Option<usize>>> {
    let mut closers = vec![None; tokens.len()];
    let mut open = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => {
                if open.len() == MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep { position: token.position });
                }
                open.push(index);
            },
            TokenKind::RParen => {
                let Some(opener) = open.pop() else {
                    return Err(ParseError::UnmatchedParenthesis { position: token.position });
                };
                closers[opener] = Some(index);
            },
            TokenKind::Integer | TokenKind::Plus | TokenKind::Minus => {},
        }
    }

    if let Some(&opener) = open.first() {
        return Err(ParseError::UnmatchedParenthesis { position: tokens[opener].position });
    }

    Ok(closers)
}

/// Converts an `Integer` token into a literal node.
///
/// # Errors
/// Returns `LiteralTooLarge` if the digits do not fit in an `i64`.
pub(in crate::interpreter::parser) fn parse_literal(token: &Token) -> ParseResult<Expr> {
    token.text
         .parse()
         .map(Expr::literal)
         .map_err(|_| ParseError::LiteralTooLarge { token:    token.text.clone(),
                                                    position: token.position, })
}
