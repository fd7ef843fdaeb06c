//! # minipas
//!
//! minipas is an interpreter for a small Pascal-like language written in
//! Rust. It tokenizes a program, parses it by recursive descent into an
//! abstract syntax tree and evaluates that tree directly, recording every
//! assignment in a single table of global variables.

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

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::{GlobalScope, Interpreter},
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents a program as a tree.
/// The tree is built by the parser and walked by the evaluator and the
/// visualizer.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Exposes each node's kind, label and children to tree walkers.
/// - Attaches source lines to the nodes that can fail at runtime.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// program. Each carries the source line it refers to.
///
/// # Responsibilities
/// - Defines one error type per phase (lexer, parser, evaluator).
/// - Combines them in a single `Error` with a coarse `ErrorKind`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// Renders a parsed tree as a Graphviz DOT graph.
///
/// The visualizer only reads the tree; drawing the graph is left to external
/// tools.
pub mod visualizer;

/// Parses and evaluates a program, returning its global variables.
///
/// Parsing completes in full before evaluation starts. Each call uses a fresh
/// interpreter, so separate runs never share variables.
///
/// # Errors
/// Returns the first lex, syntax or runtime error. No partial table is
/// returned.
///
/// # Examples
/// ```
/// use minipas::run;
///
/// let globals = run("PROGRAM p; VAR a, b : INTEGER; BEGIN a := 2; b := a * 3 END.").unwrap();
/// assert_eq!(globals["a"], 2.0);
/// assert_eq!(globals["b"], 6.0);
///
/// // Reading a declared but never assigned variable is an error.
/// let source = "PROGRAM p; VAR a, b : INTEGER; BEGIN a := b END.";
/// assert!(run(source).is_err());
/// ```
pub fn run(source: &str) -> Result<GlobalScope, Error> {
    let tree = parse(source)?;
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&tree)?;
    debug!(variables = interpreter.globals().len(), "run complete");

    Ok(interpreter.into_globals())
}
