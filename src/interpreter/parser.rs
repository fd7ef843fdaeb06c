/// Additive and multiplicative expression parsing.
///
/// Handles the left-associative binary operators of `expr` and `term`.
pub mod binary;
/// Program, block and declaration parsing.
///
/// Parses the program header, the optional `VAR` section and fans each
/// multi-identifier declaration out into one node per identifier.
pub mod block;
/// Core parser state and the grammar entry point.
///
/// Holds the lexer and the single lookahead token, and provides `expect`.
pub mod core;
/// Statement parsing.
///
/// Compound statements, statement lists, assignments and the empty statement.
pub mod statement;
/// Factor parsing.
///
/// Prefix `+`/`-`, literals, parenthesized expressions and variables.
pub mod unary;

pub use self::core::{ParseResult, Parser, parse};
