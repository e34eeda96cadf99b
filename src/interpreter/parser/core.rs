use std::ops::Range;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::utils::{match_parentheses, parse_literal},
    },
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
///
/// Each level of nesting costs one level of recursion while parsing and
/// printing, so the limit keeps pathological input from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a token sequence into an expression tree.
///
/// This is the entry point for parsing. The grammar is
///
/// ```text
/// expression := operand (("+" | "-") operand)*
/// operand    := integer | "(" expression ")"
/// ```
///
/// Operators have equal precedence and group to the left, so `1+2-3` parses
/// as `(1 + 2) - 3`. Parentheses are paired up front in one pass; a group is
/// then resolved by recursively parsing the tokens strictly between its `(`
/// and `)`.
///
/// # Parameters
/// - `tokens`: The full token sequence produced by the lexer.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - `EmptyInput` for an empty sequence or an empty group `()`.
/// - `UnmatchedParenthesis` for a `(` without a `)` or a `)` without a `(`.
/// - `NestingTooDeep` for groups nested beyond [`MAX_NESTING_DEPTH`].
/// - `UnexpectedToken` for a misplaced operator or operand.
/// - `UnexpectedEndOfInput` for an operator with nothing after it.
/// - `LiteralTooLarge` for an integer that does not fit in `i64`.
///
/// # Example
/// ```
/// use parsum::interpreter::{lexer::lex, parser::parse};
///
/// let tokens = lex("(13+4)-(12+1)").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "((13 + 4) - (12 + 1))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let closers = match_parentheses(tokens)?;
    let expr = parse_expression(tokens, &closers, 0..tokens.len(), 0)?;
    tracing::debug!(tokens = tokens.len(),
                    nodes = expr.node_count(),
                    depth = expr.depth(),
                    "parsed expression");
    Ok(expr)
}

/// Parses the left-associative run of operands in `range`.
///
/// `empty_position` is reported if `range` is empty; for a group it is the
/// position of the closing parenthesis.
fn parse_expression(tokens: &[Token],
                    closers: &[Option<usize>],
                    range: Range<usize>,
                    empty_position: usize)
                    -> ParseResult<Expr> {
    if range.is_empty() {
        return Err(ParseError::EmptyInput { position: empty_position });
    }

    let (first, mut index) = parse_operand(tokens, closers, range.start)?;
    let mut rest = Vec::new();

    while index < range.end {
        let token = &tokens[index];
        let op = token_to_binary_operator(token)?;
        index += 1;

        if index == range.end {
            return Err(ParseError::UnexpectedEndOfInput { position: token.position });
        }

        let (operand, next) = parse_operand(tokens, closers, index)?;
        rest.push((op, operand));
        index = next;
    }

    Ok(Expr::chain(first, rest))
}

/// Parses the operand starting at `index`.
///
/// # Returns
/// The operand and the index of the first token after it.
fn parse_operand(tokens: &[Token],
                 closers: &[Option<usize>],
                 index: usize)
                 -> ParseResult<(Expr, usize)> {
    let token = &tokens[index];

    match token.kind {
        TokenKind::Integer => Ok((parse_literal(token)?, index + 1)),
        TokenKind::LParen => {
            let Some(close) = closers[index] else {
                return Err(ParseError::UnmatchedParenthesis { position: token.position });
            };
            tracing::trace!(open = token.position, len = close - index - 1, "parsing group");

            let expr = parse_expression(tokens, closers, index + 1..close, tokens[close].position)?;
            Ok((expr, close + 1))
        },
        TokenKind::RParen => Err(ParseError::UnmatchedParenthesis { position: token.position }),
        TokenKind::Plus | TokenKind::Minus => {
            Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                              position: token.position, })
        },
    }
}

/// Maps an operator token to its binary operator.
///
/// # Errors
/// A `)` in operator position has no opener in scope and is reported as
/// `UnmatchedParenthesis`; any other non-operator is `UnexpectedToken`.
fn token_to_binary_operator(token: &Token) -> ParseResult<BinaryOperator> {
    match token.kind {
        TokenKind::Plus => Ok(BinaryOperator::Add),
        TokenKind::Minus => Ok(BinaryOperator::Sub),
        TokenKind::RParen => Err(ParseError::UnmatchedParenthesis { position: token.position }),
        TokenKind::Integer | TokenKind::LParen => {
            Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                              position: token.position, })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::lex;

    fn parse_source(source: &str) -> ParseResult<Expr> {
        parse(&lex(source).unwrap())
    }

    fn add(left: Expr, right: Expr) -> Expr {
        Expr::binary(left, BinaryOperator::Add, right)
    }

    fn sub(left: Expr, right: Expr) -> Expr {
        Expr::binary(left, BinaryOperator::Sub, right)
    }

    const fn lit(value: i64) -> Expr {
        Expr::literal(value)
    }

    #[test]
    fn single_literal() {
        assert_eq!(parse_source("5").unwrap(), lit(5));
    }

    #[test]
    fn parenthesized_pair() {
        assert_eq!(parse_source("(1+2)").unwrap(), add(lit(1), lit(2)));
    }

    #[test]
    fn two_groups() {
        assert_eq!(parse_source("(13+4)-(12+1)").unwrap(),
                   sub(add(lit(13), lit(4)), add(lit(12), lit(1))));
    }

    #[test]
    fn nested_group() {
        assert_eq!(parse_source("(1+(2-1))").unwrap(), add(lit(1), sub(lit(2), lit(1))));
    }

    #[test]
    fn nested_group_on_the_left() {
        assert_eq!(parse_source("((1-2)+3)").unwrap(), add(sub(lit(1), lit(2)), lit(3)));
    }

    #[test]
    fn flat_chain_groups_to_the_left() {
        use BinaryOperator::{Add, Sub};
        assert_eq!(parse_source("1+2-3").unwrap(),
                   Expr::chain(lit(1), vec![(Add, lit(2)), (Sub, lit(3))]));
        assert_eq!(parse_source("10-2-3").unwrap().to_string(), "((10 - 2) - 3)");
    }

    #[test]
    fn long_flat_chain_stays_shallow() {
        let source = format!("{}1", "1+".repeat(100_000));
        let expr = parse_source(&source).unwrap();
        assert_eq!(expr.depth(), 2);
        assert_eq!(expr.node_count(), 100_002);
    }

    #[test]
    fn nesting_up_to_the_limit() {
        let depth = MAX_NESTING_DEPTH;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_source(&source).unwrap(), lit(1));
    }

    #[test]
    fn nesting_past_the_limit() {
        let depth = MAX_NESTING_DEPTH + 1;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_source(&source),
                   Err(ParseError::NestingTooDeep { position: MAX_NESTING_DEPTH }));
    }

    #[test]
    fn far_too_deep_nesting_is_an_error() {
        let source = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(parse_source(&source), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn redundant_parentheses_collapse() {
        assert_eq!(parse_source("((7))").unwrap(), lit(7));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(&[]), Err(ParseError::EmptyInput { position: 0 }));
    }

    #[test]
    fn empty_group() {
        assert_eq!(parse_source("1+()"), Err(ParseError::EmptyInput { position: 3 }));
    }

    #[test]
    fn missing_close() {
        assert_eq!(parse_source("(1+2"), Err(ParseError::UnmatchedParenthesis { position: 0 }));
        assert_eq!(parse_source("(1+(2-1)"),
                   Err(ParseError::UnmatchedParenthesis { position: 0 }));
    }

    #[test]
    fn missing_open() {
        assert_eq!(parse_source("1+2)"), Err(ParseError::UnmatchedParenthesis { position: 3 }));
        assert_eq!(parse_source(")"), Err(ParseError::UnmatchedParenthesis { position: 0 }));
    }

    #[test]
    fn dangling_operator() {
        assert_eq!(parse_source("1+"), Err(ParseError::UnexpectedEndOfInput { position: 1 }));
        assert_eq!(parse_source("(1-)"), Err(ParseError::UnexpectedEndOfInput { position: 2 }));
    }

    #[test]
    fn misplaced_tokens() {
        assert!(matches!(parse_source("+1"),
                         Err(ParseError::UnexpectedToken { position: 0, .. })));
        assert!(matches!(parse_source("1+-2"),
                         Err(ParseError::UnexpectedToken { position: 2, .. })));
        assert!(matches!(parse_source("(1)(2)"),
                         Err(ParseError::UnexpectedToken { position: 3, .. })));
        assert!(matches!(parse_source("1 2"),
                         Err(ParseError::UnexpectedToken { position: 2, .. })));
    }

    #[test]
    fn literal_too_large() {
        assert!(matches!(parse_source("99999999999999999999"),
                         Err(ParseError::LiteralTooLarge { position: 0, .. })));
    }

    #[test]
    fn stray_close_is_found_before_grammar_errors() {
        assert_eq!(parse_source("+1)"), Err(ParseError::UnmatchedParenthesis { position: 2 }));
    }
}
