use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses, negations, calls and blocks the parser
/// accepts. Keeps recursion in both the parser and the evaluator bounded.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the [`Lexer`] on demand. `current` always holds the
/// next unconsumed token; after a successful production it points at the
/// first token the production did not use.
///
/// # Example
/// ```
/// use probscript::{ast::Statement, interpreter::parser::core::Parser};
///
/// let program = Parser::new("x = 1\nprint x").unwrap().parse_program().unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[1], Statement::Print { line: 2, .. }));
/// ```
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    depth: usize,
    pub(in crate::interpreter::parser) current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the very first token is malformed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  depth: 0,
                  current })
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Grammar: `program := statement*`
    ///
    /// # Errors
    /// Returns the first lexical or syntax error; no partial program is
    /// produced.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while !self.current.is_end() {
            statements.push(self.parse_statement()?);
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, equality, and descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := equality`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_equality()
    }

    /// Consumes the current token and pulls the next one from the lexer.
    ///
    /// Returns the consumed token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Returns `true` if the lookahead has the given kind.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] at the lookahead once
    /// [`MAX_NESTING_DEPTH`] is exceeded.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                    found:  self.current.text.clone(),
                                                    line:   self.current.line,
                                                    column: self.current.column, });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}
