/// Binary operator evaluation logic.
///
/// Applies `+` and `-` to two integers with overflow checking.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the post-order fold over the expression tree.
pub mod core;

pub use self::core::{EvalResult, evaluate};
