use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - `repeat <expression> <block>`
    /// - `collect <identifier> <expression>`
    /// - `print <expression>`
    /// - `if <expression> <block>`
    /// - `<identifier> = <expression>`
    /// - a bare `{ ... }` block.
    ///
    /// The statement's source line is taken from its first token.
    ///
    /// # Errors
    /// Returns a `ParseError` if no statement starts at the lookahead or any
    /// part of the statement is malformed.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        match self.current.kind {
            TokenKind::Repeat => {
                self.advance()?;
                let count = self.parse_expression()?;
                let body = self.parse_block()?;
                Ok(Statement::Repeat { count, body, line })
            },
            TokenKind::Collect => {
                self.advance()?;
                let sample = self.parse_sample_name()?;
                let value = self.parse_expression()?;
                Ok(Statement::Collect { sample, value, line })
            },
            TokenKind::Print => {
                self.advance()?;
                let expr = self.parse_expression()?;
                Ok(Statement::Print { expr, line })
            },
            TokenKind::If => {
                self.advance()?;
                let condition = self.parse_expression()?;
                let body = self.parse_block()?;
                Ok(Statement::If { condition,
                                   body,
                                   line })
            },
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::LBrace => Ok(Statement::Block(self.parse_block()?)),
            _ => Err(self.unexpected("Expected statement")),
        }
    }

    /// Parses `<identifier> = <expression>`.
    ///
    /// Variables need no declaration; assignment creates or overwrites.
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;
        let name = self.parse_identifier("Expected variable name")?;
        self.expect(TokenKind::Assign, "Expected '=' after identifier in assignment")?;
        let value = self.parse_expression()?;

        Ok(Statement::Assign { name, value, line })
    }

    /// Parses the mandatory sample name after `collect`.
    ///
    /// The name must be an identifier directly followed by the value
    /// expression. A bare `collect <expression>` is rejected, including the
    /// ambiguous `collect x` where `x` could only be the value.
    fn parse_sample_name(&mut self) -> ParseResult<String> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.missing_sample_name());
        }
        let name = self.advance()?.text;

        if starts_expression(self.current.kind) {
            return Ok(name);
        }
        Err(self.missing_sample_name())
    }

    fn missing_sample_name(&self) -> ParseError {
        ParseError::MissingSampleName { found:  self.current.text.clone(),
                                        line:   self.current.line,
                                        column: self.current.column, }
    }
}

/// Returns `true` if a token of this kind can begin an expression.
const fn starts_expression(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Number
             | TokenKind::StringLiteral
             | TokenKind::Identifier
             | TokenKind::Minus
             | TokenKind::LParen)
}
