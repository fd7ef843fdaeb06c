use tracing::debug;

use crate::{
    ast::Node,
    error::{Error, SyntaxError},
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, Error>;

/// Recursive descent parser with a single token of lookahead.
///
/// Tokens are pulled from the [`Lexer`] one at a time as the grammar
/// consumes them; the source is never tokenized up front.
pub struct Parser<'source> {
    lexer:   Lexer<'source>,
    current: Token,
}

/// Parses a complete program.
///
/// This is the entry point for parsing. The whole source must form one
/// program followed by end of input.
///
/// # Errors
/// Returns a lex error for an unrecognized character, or a syntax error for
/// the first token that does not fit the grammar.
///
/// # Example
/// ```
/// use minipas::{ast::NodeKind, interpreter::parser::parse};
///
/// let tree = parse("PROGRAM demo; BEGIN END.").unwrap();
/// assert_eq!(tree.kind(), NodeKind::Program);
///
/// assert!(parse("PROGRAM demo; BEGIN END. x").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    Parser::new(source)?.parse()
}

impl<'source> Parser<'source> {
    /// Creates a parser over `source` and primes the lookahead token.
    ///
    /// # Errors
    /// Returns a lex error if the first token cannot be read.
    pub fn new(source: &'source str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses the program and requires end of input after the final `.`.
    ///
    /// Grammar: `program := "PROGRAM" identifier ";" block "."`
    ///
    /// # Errors
    /// Returns the first lex or syntax error encountered. Tokens left over
    /// after the final `.` are reported as [`SyntaxError::TrailingTokens`].
    pub fn parse(mut self) -> ParseResult<Node> {
        let program = self.parse_program()?;
        if self.current != Token::Eof {
            return Err(SyntaxError::TrailingTokens { found: self.current.to_string(),
                                                     line:  self.line(), }.into());
        }
        debug!(line = self.line(), "program parsed");
        Ok(program)
    }

    /// The lookahead token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// The source line of the lookahead token.
    pub(in crate::interpreter::parser) const fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Pulls the next token from the lexer and returns the one it replaces.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the lookahead if it is of the same kind as `kind`.
    ///
    /// Payloads are ignored when comparing, so any identifier matches
    /// `Token::Identifier(String::new())`.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] naming the expected and the
    /// actual token when they differ.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: &Token) -> ParseResult<Token> {
        if self.current.same_kind(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Consumes an identifier and returns its name.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.expect(&Token::Identifier(String::new()))? {
            Token::Identifier(name) => Ok(name),
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Builds an [`SyntaxError::UnexpectedToken`] for the current lookahead.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: impl Into<String>) -> Error {
        SyntaxError::UnexpectedToken { expected: expected.into(),
                                       found:    self.current.to_string(),
                                       line:     self.line(), }.into()
    }
}
