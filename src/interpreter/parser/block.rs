use tracing::trace;

use crate::{
    ast::{Node, TypeKind},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses the program header and body.
    ///
    /// Grammar: `program := "PROGRAM" identifier ";" block "."`
    ///
    /// # Returns
    /// A [`Node::Program`] owning the parsed block.
    pub(in crate::interpreter::parser) fn parse_program(&mut self) -> ParseResult<Node> {
        self.expect(&Token::Program)?;
        let name = self.expect_identifier()?;
        self.expect(&Token::Semi)?;
        let block = self.parse_block()?;
        self.expect(&Token::Dot)?;

        Ok(Node::Program { name,
                           block: Box::new(block) })
    }

    /// Parses declarations followed by the main compound statement.
    ///
    /// Grammar: `block := declarations compound_statement`
    fn parse_block(&mut self) -> ParseResult<Node> {
        let declarations = self.parse_declarations()?;
        let compound = self.parse_compound_statement()?;

        Ok(Node::Block { declarations,
                         compound: Box::new(compound) })
    }

    /// Parses the optional `VAR` section.
    ///
    /// Grammar: `declarations := ("VAR" (var_declaration ";")+)?`
    ///
    /// # Returns
    /// All [`Node::VarDecl`] nodes of the section in source order, or an
    /// empty list when there is no `VAR` keyword.
    fn parse_declarations(&mut self) -> ParseResult<Vec<Node>> {
        let mut declarations = Vec::new();
        if *self.current() != Token::Var {
            return Ok(declarations);
        }
        self.advance()?;

        loop {
            declarations.extend(self.parse_var_declaration()?);
            self.expect(&Token::Semi)?;
            if !matches!(self.current(), Token::Identifier(_)) {
                break;
            }
        }

        Ok(declarations)
    }

    /// Parses one declaration line, fanning it out per identifier.
    ///
    /// `a, b, c : INTEGER` yields three independent [`Node::VarDecl`] nodes,
    /// each with its own copy of the type node.
    ///
    /// Grammar: `var_declaration := identifier ("," identifier)* ":" type_spec`
    fn parse_var_declaration(&mut self) -> ParseResult<Vec<Node>> {
        let mut variables = Vec::new();
        loop {
            let line = self.line();
            let name = self.expect_identifier()?;
            variables.push(Node::Variable { name, line });
            if *self.current() != Token::Comma {
                break;
            }
            self.advance()?;
        }
        self.expect(&Token::Colon)?;
        let type_spec = self.parse_type_spec()?;
        trace!(count = variables.len(), type_spec = %type_spec.label(), "declaration fan-out");

        Ok(variables.into_iter()
                    .map(|variable| Node::VarDecl { variable:  Box::new(variable),
                                                    type_spec: Box::new(type_spec.clone()), })
                    .collect())
    }

    /// Parses a type name.
    ///
    /// Grammar: `type_spec := "INTEGER" | "REAL"`
    fn parse_type_spec(&mut self) -> ParseResult<Node> {
        let kind = match self.current() {
            Token::Integer => TypeKind::Integer,
            Token::Real => TypeKind::Real,
            _ => return Err(self.unexpected("type 'INTEGER' or 'REAL'")),
        };
        self.advance()?;

        Ok(Node::TypeSpec(kind))
    }
}
