/// Core parsing logic.
///
/// Contains the parser entry point and the left-associative operand/operator
/// loop that builds `BinaryOp` and `Chain` nodes, and the nesting limit.
pub mod core;

/// Utility functions for the parser.
///
/// Provides single-pass parenthesis matching and literal conversion shared by
/// the core parsing routines.
pub mod utils;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, parse};
