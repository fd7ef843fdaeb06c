use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a `BEGIN ... END` block.
    ///
    /// Grammar: `compound_statement := "BEGIN" statement_list "END"`
    ///
    /// # Returns
    /// A [`Node::Compound`] holding the statements in source order.
    pub(in crate::interpreter::parser) fn parse_compound_statement(&mut self)
                                                                   -> ParseResult<Node> {
        self.expect(&Token::Begin)?;
        let children = self.parse_statement_list()?;
        self.expect(&Token::End)?;

        Ok(Node::Compound { children })
    }

    /// Parses `;`-separated statements.
    ///
    /// The list ends as soon as the lookahead is not `;`. An identifier at
    /// that point means a statement follows without a separator, which is
    /// reported instead of being left for `END` to reject.
    ///
    /// Grammar: `statement_list := statement (";" statement)*`
    ///
    /// # Errors
    /// Returns [`SyntaxError::MissingSeparator`] when an identifier follows a
    /// statement directly.
    fn parse_statement_list(&mut self) -> ParseResult<Vec<Node>> {
        let mut statements = vec![self.parse_statement()?];
        while *self.current() == Token::Semi {
            self.advance()?;
            statements.push(self.parse_statement()?);
        }

        if matches!(self.current(), Token::Identifier(_)) {
            return Err(SyntaxError::MissingSeparator { found: self.current().to_string(),
                                                       line:  self.line(), }.into());
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// Grammar: `statement := compound_statement | assignment | empty`
    ///
    /// Any lookahead that starts neither a compound statement nor an
    /// assignment yields the empty statement without consuming anything.
    fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.current() {
            Token::Begin => self.parse_compound_statement(),
            Token::Identifier(_) => self.parse_assignment(),
            _ => Ok(Node::NoOp),
        }
    }

    /// Parses an assignment.
    ///
    /// Grammar: `assignment := identifier ":=" expr`
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let target = self.parse_variable()?;
        self.expect(&Token::Assign)?;
        let value = self.parse_expr()?;

        Ok(Node::Assign { target: Box::new(target),
                          value:  Box::new(value), })
    }

    /// Parses a variable reference.
    ///
    /// Grammar: `variable := identifier`
    pub(in crate::interpreter::parser) fn parse_variable(&mut self) -> ParseResult<Node> {
        let line = self.line();
        let name = self.expect_identifier()?;

        Ok(Node::Variable { name, line })
    }
}
