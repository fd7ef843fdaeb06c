#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum SyntaxError {
    /// The lookahead token is not the one the grammar requires here.
    UnexpectedToken {
        /// What the grammar expected.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement follows another without a separating `;`.
    MissingSeparator {
        /// The token that starts the unseparated statement.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after the closing `.` of the program.
    TrailingTokens {
        /// The first extra token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::MissingSeparator { found, line } => write!(f,
                                                             "Error on line {line}: Missing ';' before {found}."),
            Self::TrailingTokens { found, line } => write!(f,
                                                           "Error on line {line}: Extra tokens after the end of the program: {found}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
