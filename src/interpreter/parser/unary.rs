use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// The only call whose arguments are checked while parsing.
pub const GET_STAT: &str = "get_stat";

impl Parser<'_> {
    /// Parses prefix negation.
    ///
    /// The rule is: `unary := "-" unary | primary`
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        if self.check(TokenKind::Minus) {
            let line = self.advance()?.line;
            let expr = self.nested(Self::parse_unary)?;
            return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                      expr: Box::new(expr),
                                      line });
        }
        self.parse_primary()
    }

    /// Parses a primary expression.
    ///
    /// Supported forms:
    /// - number and string literals,
    /// - a variable reference, or a call when the name is followed by `(`,
    /// - a parenthesized sub-expression.
    ///
    /// # Errors
    /// Returns a `ParseError` for any other token, for an unclosed
    /// parenthesis, for a number literal that overflows `f64`, or for
    /// nesting beyond [`MAX_NESTING_DEPTH`](super::core::MAX_NESTING_DEPTH).
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let line = self.current.line;

        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance()?;
                let value = token.text
                                 .parse::<f64>()
                                 .ok()
                                 .filter(|v| v.is_finite())
                                 .ok_or_else(|| ParseError::InvalidNumber { found:  token.text.clone(),
                                                                              line:   token.line,
                                                                              column: token.column, })?;
                Ok(Expr::Number { value, line })
            },
            TokenKind::StringLiteral => {
                let text = self.advance()?.text;
                Ok(Expr::Str { text, line })
            },
            TokenKind::Identifier => {
                let name = self.advance()?.text;
                if self.match_kind(TokenKind::LParen)? {
                    return self.nested(|parser| parser.parse_call(name, line));
                }
                Ok(Expr::Variable { name, line })
            },
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.nested(Self::parse_expression)?;
                self.expect(TokenKind::RParen, "Expected ')'")?;
                Ok(expr)
            },
            _ => Err(self.unexpected("Expected primary expression")),
        }
    }

    /// Parses the argument list of a call; the `(` is already consumed.
    ///
    /// `get_stat` must receive a string literal naming the statistic as its
    /// first argument.
    fn parse_call(&mut self, name: String, line: usize) -> ParseResult<Expr> {
        if name == GET_STAT && !self.check(TokenKind::StringLiteral) {
            return Err(ParseError::InvalidStatArgument { found:  self.current.text.clone(),
                                                         line:   self.current.line,
                                                         column: self.current.column, });
        }

        let arguments = self.parse_arguments(Self::parse_expression)?;
        Ok(Expr::Call { name,
                        arguments,
                        line })
    }
}
