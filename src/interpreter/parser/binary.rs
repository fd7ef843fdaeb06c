use crate::{
    ast::{Node, Operator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// A [`Node::BinaryOp`] tree representing the parsed expression.
    pub(in crate::interpreter::parser) fn parse_expr(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;
        loop {
            if let Some(op) = token_to_operator(self.current())
               && matches!(op, Operator::Plus | Operator::Minus)
            {
                let line = self.line();
                self.advance()?;
                let right = self.parse_term()?;
                left = Node::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*`, `DIV` and `/`. Both division
    /// operators are accepted here and kept apart in the tree.
    ///
    /// The rule is: `term := factor (("*" | "DIV" | "/") factor)*`
    fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;
        loop {
            if let Some(op) = token_to_operator(self.current())
               && matches!(op, Operator::Mul | Operator::IntegerDiv | Operator::FloatDiv)
            {
                let line = self.line();
                self.advance()?;
                let right = self.parse_factor()?;
                left = Node::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding operator.
///
/// Returns `Some(Operator)` when the token is one of `+`, `-`, `*`, `DIV` or
/// `/`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use minipas::{
///     ast::Operator,
///     interpreter::{lexer::Token, parser::binary::token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::IntegerDiv), Some(Operator::IntegerDiv));
/// assert_eq!(token_to_operator(&Token::Slash), Some(Operator::FloatDiv));
/// assert_eq!(token_to_operator(&Token::Semi), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Plus),
        Token::Minus => Some(Operator::Minus),
        Token::Star => Some(Operator::Mul),
        Token::IntegerDiv => Some(Operator::IntegerDiv),
        Token::Slash => Some(Operator::FloatDiv),
        _ => None,
    }
}
