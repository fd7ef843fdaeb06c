use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_number)]
    RealConst(f64),
    /// Integer literal tokens, such as `42`. Stored as `f64` like every other
    /// runtime value.
    #[regex(r"[0-9]+", parse_number)]
    IntegerConst(f64),
    /// `PROGRAM`
    #[token("PROGRAM")]
    Program,
    /// `VAR`
    #[token("VAR")]
    Var,
    /// `DIV`
    #[token("DIV")]
    IntegerDiv,
    /// `INTEGER`
    #[token("INTEGER")]
    Integer,
    /// `REAL`
    #[token("REAL")]
    Real,
    /// `BEGIN`
    #[token("BEGIN")]
    Begin,
    /// `END`
    #[token("END")]
    End,
    /// Identifier tokens; variable or program names such as `x` or `Part10`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `;`
    #[token(";")]
    Semi,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `.`
    #[token(".")]
    Dot,
    /// `{ Comments. }`
    ///
    /// Comments do not nest. An unterminated comment runs to the end of the
    /// input.
    #[regex(r"\{[^}]*\}?", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    }, allow_greedy = true)]
    Comment,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+", |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Ignored,
    /// End of input. Never matched by the generated lexer; produced by
    /// [`Lexer::next_token`] once the source is exhausted.
    Eof,
}

/// The coarse lexical category of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenCategory {
    /// Integer or real literal.
    Number,
    /// Arithmetic operator, including `DIV`.
    Operator,
    /// Reserved word.
    Keyword,
    /// User identifier.
    Identifier,
    /// Punctuation such as `;`, `:=` or `(`.
    Punctuation,
    /// End of input.
    EndOfInput,
}

impl Token {
    /// Returns the lexical category of the token.
    ///
    /// ## Example
    /// ```
    /// use minipas::interpreter::lexer::{Token, TokenCategory};
    ///
    /// assert_eq!(Token::IntegerDiv.category(), TokenCategory::Operator);
    /// assert_eq!(Token::Begin.category(), TokenCategory::Keyword);
    /// ```
    #[must_use]
    pub const fn category(&self) -> TokenCategory {
        match self {
            Self::RealConst(_) | Self::IntegerConst(_) => TokenCategory::Number,
            Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::IntegerDiv => {
                TokenCategory::Operator
            },
            Self::Program | Self::Var | Self::Integer | Self::Real | Self::Begin | Self::End => {
                TokenCategory::Keyword
            },
            Self::Identifier(_) => TokenCategory::Identifier,
            Self::Assign
            | Self::Semi
            | Self::Colon
            | Self::Comma
            | Self::LParen
            | Self::RParen
            | Self::Dot
            | Self::Comment
            | Self::Ignored => TokenCategory::Punctuation,
            Self::Eof => TokenCategory::EndOfInput,
        }
    }

    /// Returns `true` if both tokens are of the same kind, ignoring payloads.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RealConst(value) => write!(f, "real literal {value}"),
            Self::IntegerConst(value) => write!(f, "integer literal {value}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Program => write!(f, "'PROGRAM'"),
            Self::Var => write!(f, "'VAR'"),
            Self::IntegerDiv => write!(f, "'DIV'"),
            Self::Integer => write!(f, "'INTEGER'"),
            Self::Real => write!(f, "'REAL'"),
            Self::Begin => write!(f, "'BEGIN'"),
            Self::End => write!(f, "'END'"),
            Self::Assign => write!(f, "':='"),
            Self::Semi => write!(f, "';'"),
            Self::Colon => write!(f, "':'"),
            Self::Comma => write!(f, "','"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Dot => write!(f, "'.'"),
            Self::Comment => write!(f, "comment"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are skipped in whitespace and comments.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Integer and real literals share this callback; the distinction between
/// them is carried by the token variant only.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Pull-based tokenizer over a source string.
///
/// Each call to [`Lexer::next_token`] advances over the source exactly once.
/// After the input is exhausted every further call yields [`Token::Eof`].
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, Token>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:    Token::lexer(source),
               finished: false, }
    }

    /// Returns the next token.
    ///
    /// # Errors
    /// Returns a [`LexError`] naming the offending character and its byte
    /// position when no token rule matches.
    ///
    /// # Example
    /// ```
    /// use minipas::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x := 3.5 { ignored }");
    /// assert_eq!(lexer.next_token().unwrap(), Token::Identifier("x".to_string()));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Assign);
    /// assert_eq!(lexer.next_token().unwrap(), Token::RealConst(3.5));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    /// assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(())) => {
                let position = self.inner.span().start;
                let character = self.inner.slice().chars().next().unwrap_or('\u{FFFD}');
                let line = self.inner.extras.line;
                debug!(%character, position, line, "unrecognized character");
                Err(LexError { character,
                               position,
                               line })
            },
            None => Ok(Token::Eof),
        }
    }

    /// The line the lexer is currently on, starting at 1.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including the first [`Token::Eof`] or the
    /// first error, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        if matches!(item, Ok(Token::Eof) | Err(_)) {
            self.finished = true;
        }
        Some(item)
    }
}
