use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses equality expressions.
    ///
    /// The rule is: `equality := comparison (("==" | "!=") comparison)*`
    pub fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_comparison, |op| {
                matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
            })
    }

    /// Parses relational expressions.
    ///
    /// The rule is: `comparison := additive ((">" | "<" | ">=" | "<=")
    /// additive)*`
    pub fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_additive, |op| {
                matches!(op,
                         BinaryOperator::Greater
                         | BinaryOperator::Less
                         | BinaryOperator::GreaterEqual
                         | BinaryOperator::LessEqual)
            })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_multiplicative, |op| {
                matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            })
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_unary, |op| {
                matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            })
    }

    /// Shared loop for one left-associative precedence tier.
    ///
    /// Parses an operand with `operand`, then keeps consuming operators
    /// accepted by `accepts`, folding each new operand into a left-leaning
    /// `Expr::BinaryOp` chain.
    fn parse_left_assoc(&mut self,
                        operand: fn(&mut Self) -> ParseResult<Expr>,
                        accepts: fn(BinaryOperator) -> bool)
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = token_to_binary_operator(self.current.kind)
              && accepts(op)
        {
            let line = self.advance()?.line;
            let right = operand(self)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use probscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(TokenKind::LessEqual),
///            Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        _ => None,
    }
}
