/// The evaluator module reduces expression trees to integers.
///
/// The evaluator traverses the tree in post-order and applies each operator
/// to the values of its operands.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Reports integer overflow as a runtime error.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces an ordered sequence of
/// tokens: integers, `+`, `-`, `(` and `)`. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source text and
///   position.
/// - Reports lexical errors for characters outside the alphabet.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a binary-expression tree, recursing into parenthesized groups.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting errors with the offending position.
pub mod parser;
