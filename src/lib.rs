//! # parsum
//!
//! parsum is a small interpreter for integer arithmetic written in Rust.
//! It lexes, parses and evaluates expressions built from integer literals,
//! `+`, `-` and parenthesized groups, such as `(13+4)-(12+1)`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, a closed set of literal and binary
/// operation nodes. The tree is built by the parser and folded by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the expression and operator types.
/// - Prints trees in a fully parenthesized form.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Every phase has its own error enum carrying the position of the failure,
/// and [`error::Error`] joins them for the whole pipeline.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte positions and detailed messages for context.
/// - Integrates with `std::error::Error` and `?`.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for each phase.
pub mod interpreter;
/// General utilities that are not specific to a single phase.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, TokenKind, lex},
        parser::parse,
    },
};

/// Lexes and parses `source` into an expression tree.
///
/// # Errors
/// Returns [`Error::Lex`] or [`Error::Parse`] from the failing phase.
///
/// # Examples
/// ```
/// use parsum::parse_source;
///
/// let expr = parse_source("1+(2-1)").unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 - 1))");
/// ```
pub fn parse_source(source: &str) -> Result<Expr, Error> {
    let tokens = lex(source)?;
    Ok(parse(&tokens)?)
}

/// Returns the value of the expression in `source`.
///
/// This function runs the whole pipeline: the source is lexed into tokens,
/// the tokens are parsed into a tree and the tree is evaluated.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. The variant names
/// the phase and the inner error carries the position of the failure.
///
/// # Examples
/// ```
/// use parsum::{Error, ParseError, get_result};
///
/// assert_eq!(get_result("(13+4)-(12+1)").unwrap(), 4);
///
/// // A group that is never closed.
/// let err = get_result("(1+2").unwrap_err();
/// assert!(matches!(err, Error::Parse(ParseError::UnmatchedParenthesis { position: 0 })));
/// ```
pub fn get_result(source: &str) -> Result<i64, Error> {
    let expr = parse_source(source)?;
    let value = evaluate(&expr)?;
    tracing::debug!(value, "evaluated expression");
    Ok(value)
}
