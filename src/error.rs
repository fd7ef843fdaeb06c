/// Lexing errors.
///
/// Raised when the lexer meets a character that no token rule accepts.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// reading a variable that was never assigned.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines all errors the parser reports when the lookahead token does not
/// match what a grammar rule requires.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// The kind of failure behind an [`Error`], for callers that only need to
/// branch on the category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character in the source.
    Lex,
    /// A token that does not fit the grammar.
    Syntax,
    /// A read of a variable that was never assigned.
    UndefinedVariable,
    /// An operator the evaluator does not accept for the node it sits on.
    UnknownOperator,
    /// An assignment whose target is not a variable reference.
    InvalidAssignmentTarget,
}

#[derive(Debug)]
/// Any error produced while lexing, parsing or evaluating a program.
///
/// Every phase aborts on its first error; no partial tree or partial variable
/// table is ever returned alongside one of these.
pub enum Error {
    /// Failure in the lexer.
    Lex(LexError),
    /// Failure in the parser.
    Syntax(SyntaxError),
    /// Failure in the evaluator.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// ## Example
    /// ```
    /// use minipas::{error::ErrorKind, run};
    ///
    /// let err = run("PROGRAM p; BEGIN x := y END.").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UndefinedVariable { .. }) => ErrorKind::UndefinedVariable,
            Self::Runtime(RuntimeError::UnknownOperator { .. }) => ErrorKind::UnknownOperator,
            Self::Runtime(RuntimeError::InvalidAssignmentTarget { .. }) => {
                ErrorKind::InvalidAssignmentTarget
            },
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<SyntaxError> for Error {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
