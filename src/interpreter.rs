/// The evaluator module executes a parsed tree.
///
/// The evaluator walks the AST once, evaluating expressions and statements
/// and recording every assignment in a single global variable table.
///
/// # Responsibilities
/// - Evaluates every node variant through one exhaustive dispatch.
/// - Keeps operand evaluation order fixed, left before right.
/// - Reports runtime errors such as reads of unassigned variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand, each
/// corresponding to a number, identifier, reserved word, operator or piece
/// of punctuation. Whitespace and `{ }` comments are skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens one at a time.
/// - Distinguishes reserved words from identifiers, case-sensitively.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with a single token of lookahead
/// and follows the grammar by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into a tree rooted at a single program node.
/// - Validates the grammar, reporting the first mismatch with its line.
/// - Encodes operator precedence through the `expr`/`term`/`factor` levels.
pub mod parser;
