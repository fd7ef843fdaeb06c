use std::collections::HashMap;

use tracing::debug;

use crate::{ast::Node, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The flat table of variable bindings, from identifier to value.
pub type GlobalScope = HashMap<String, f64>;

/// The value statement-like nodes evaluate to. Never observed by programs.
pub(in crate::interpreter::evaluator) const INERT: f64 = 0.0;

/// Tree-walking interpreter.
///
/// Holds the only mutable state of a run: the global variable table. Every
/// interpreter starts with an empty table of its own, so independent runs
/// never share bindings.
///
/// ## Usage
///
/// Create one interpreter per run, call [`Interpreter::interpret`] with the
/// parsed tree and then read the bindings back with
/// [`Interpreter::globals`] or [`Interpreter::into_globals`].
#[derive(Debug, Default)]
pub struct Interpreter {
    globals: GlobalScope,
}

impl Interpreter {
    /// Creates an interpreter with an empty global table.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: GlobalScope::new() }
    }

    /// Evaluates a whole tree once.
    ///
    /// # Errors
    /// Returns the first runtime error; evaluation stops immediately.
    ///
    /// # Example
    /// ```
    /// use minipas::interpreter::{evaluator::Interpreter, parser::parse};
    ///
    /// let tree = parse("PROGRAM p; BEGIN x := 2 + 3 * 4 END.").unwrap();
    /// let mut interpreter = Interpreter::new();
    /// interpreter.interpret(&tree).unwrap();
    ///
    /// assert_eq!(interpreter.globals()["x"], 14.0);
    /// ```
    pub fn interpret(&mut self, tree: &Node) -> EvalResult<()> {
        self.visit(tree)?;
        debug!(variables = self.globals.len(), "evaluation finished");
        Ok(())
    }

    /// Evaluates a node and returns its value.
    ///
    /// This is the per-variant dispatch: one handler per node kind. Nodes
    /// that only have effects evaluate to an inert value.
    ///
    /// # Errors
    /// Returns the first runtime error raised anywhere in the subtree.
    pub fn visit(&mut self, node: &Node) -> EvalResult<f64> {
        match node {
            Node::Program { block, .. } => self.visit_program(block),
            Node::Block { declarations,
                          compound, } => self.visit_block(declarations, compound),
            Node::VarDecl { .. } => Ok(Self::visit_var_decl()),
            Node::TypeSpec(_) => Ok(Self::visit_type_spec()),
            Node::Compound { children } => self.visit_compound(children),
            Node::Assign { target, value } => self.visit_assign(target, value),
            Node::BinaryOp { left, op, right, .. } => self.visit_binary_op(left, *op, right),
            Node::UnaryOp { op, expr, line } => self.visit_unary_op(*op, expr, *line),
            Node::Number(value) => Ok(*value),
            Node::Variable { name, line } => self.visit_variable(name, *line),
            Node::NoOp => Ok(INERT),
        }
    }

    /// Looks a variable up in the global table.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if the variable was never
    /// assigned. Declaring a variable does not define it.
    pub fn visit_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.globals
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// The current variable bindings.
    #[must_use]
    pub const fn globals(&self) -> &GlobalScope {
        &self.globals
    }

    /// Consumes the interpreter and returns its variable bindings.
    #[must_use]
    pub fn into_globals(self) -> GlobalScope {
        self.globals
    }

    /// Binds `value` under `name`, replacing any previous value.
    pub(in crate::interpreter::evaluator) fn bind(&mut self, name: &str, value: f64) {
        self.globals.insert(name.to_string(), value);
    }
}
