/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*` and both division operators.
pub mod binary;

/// Core evaluation logic and interpreter state.
///
/// Contains the interpreter, its global variable table and the per-variant
/// dispatch.
pub mod core;

/// Statement and declaration evaluation.
///
/// Programs, blocks, compound statements, assignments and the no-op
/// declaration nodes.
pub mod statement;

/// Unary operator evaluation.
///
/// Handles prefix identity and negation.
pub mod unary;

pub use self::core::{EvalResult, GlobalScope, Interpreter};
