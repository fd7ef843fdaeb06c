use crate::{
    ast::{Node, Operator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor.
    ///
    /// Prefix operators are right-associative, so `- - b` is parsed as
    /// `-(-(b))` and binds tighter than any binary operator.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | number
    ///             | "(" expr ")"
    ///             | identifier
    /// ```
    ///
    /// # Errors
    /// Returns an unexpected-token error when the lookahead cannot start a
    /// factor.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Node> {
        let line = self.line();
        match *self.current() {
            Token::Plus | Token::Minus => {
                let op = if *self.current() == Token::Plus {
                    Operator::Plus
                } else {
                    Operator::Minus
                };
                self.advance()?;
                let expr = self.parse_factor()?;
                Ok(Node::UnaryOp { op,
                                   expr: Box::new(expr),
                                   line })
            },
            Token::IntegerConst(value) | Token::RealConst(value) => {
                self.advance()?;
                Ok(Node::Number(value))
            },
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_expr()?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            },
            Token::Identifier(_) => self.parse_variable(),
            _ => Err(self.unexpected("number, identifier, '(', '+' or '-'")),
        }
    }
}
