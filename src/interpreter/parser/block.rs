use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Statements are parsed until the closing `}`. Reaching the end of input
    /// first is an unterminated block.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// Returns a `ParseError` if the opening brace is missing, a statement
    /// fails to parse, the block is never closed, or blocks nest too deeply.
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        let line = self.current.line;
        self.expect(TokenKind::LBrace, "Expected '{' to start block")?;

        let statements = self.nested(Self::parse_block_body)?;
        self.advance()?;

        Ok(Block { statements, line })
    }

    /// Parses statements up to, but not including, the closing `}`.
    fn parse_block_body(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.current.is_end() {
                return Err(ParseError::UnterminatedBlock { found:  self.current.text.clone(),
                                                           line:   self.current.line,
                                                           column: self.current.column, });
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }
}
