use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Consumes the lookahead if it has the given kind.
    ///
    /// Returns whether a token was consumed.
    pub(in crate::interpreter::parser) fn match_kind(&mut self,
                                                     kind: TokenKind)
                                                     -> ParseResult<bool> {
        if self.check(kind) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes a token of the given kind or fails with `message`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] pointing at the lookahead.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind,
                                                 message: &str)
                                                 -> ParseResult<Token> {
        if !self.check(kind) {
            return Err(self.unexpected(message));
        }
        self.advance()
    }

    /// Consumes an identifier and returns its name.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] if the lookahead is not an
    /// identifier.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self,
                                                           message: &str)
                                                           -> ParseResult<String> {
        Ok(self.expect(TokenKind::Identifier, message)?.text)
    }

    /// Parses a comma-separated argument list after an opening `(`.
    ///
    /// An immediately encountered `)` produces an empty list.
    ///
    /// Grammar: `arguments := (expression ("," expression)*)? ")"`
    pub(in crate::interpreter::parser) fn parse_arguments<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.match_kind(TokenKind::RParen)? {
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            if self.match_kind(TokenKind::Comma)? {
                continue;
            }
            self.expect(TokenKind::RParen, "Expected ',' or ')' after function argument")?;
            break;
        }

        Ok(items)
    }

    /// Builds an [`ParseError::UnexpectedToken`] for the lookahead.
    pub(in crate::interpreter::parser) fn unexpected(&self, message: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: message.to_string(),
                                      found:    self.current.text.clone(),
                                      line:     self.current.line,
                                      column:   self.current.column, }
    }
}
