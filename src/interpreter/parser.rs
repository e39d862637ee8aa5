/// Binary operator parsing.
///
/// One function per precedence tier, from equality down to multiplication.
/// Each tier loops while the lookahead matches its operator set and builds a
/// left-leaning chain.
pub mod binary;
/// Block parsing.
///
/// Handles `{ ... }` bodies used by `repeat`, `if` and bare blocks.
pub mod block;
/// Parser state and entry points.
///
/// Owns the lexer and the single token of lookahead, and exposes
/// [`Parser::parse_program`](core::Parser::parse_program).
pub mod core;
/// Statement parsing.
///
/// Dispatches on the leading token to assignment, `print`, `collect`,
/// `repeat`, `if` or a bare block.
pub mod statement;
/// Unary and primary expression parsing.
///
/// Negation, literals, variable references, calls and parenthesized
/// sub-expressions.
pub mod unary;
/// Parsing helpers.
///
/// Token matching, expectation checks and error construction shared by the
/// other parser modules.
pub mod utils;
