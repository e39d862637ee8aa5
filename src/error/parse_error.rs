use thiserror::Error;

use crate::error::LexError;

/// Represents all errors that can occur during parsing.
///
/// Positional variants report the line and column of the offending token
/// together with its text, rendered as `(got '<text>')`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token where a specific token or construct was required.
    #[error("Parse error at line {line}, column {column}: {expected} (got '{found}')")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// Text of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// End of input reached inside a `{ ... }` block.
    #[error("Parse error at line {line}, column {column}: unterminated block, expected '}}' (got '{found}')")]
    UnterminatedBlock {
        /// Text of the token encountered.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// `collect` was not followed by a sample name.
    #[error("Parse error at line {line}, column {column}: collect requires a sample name, e.g. 'collect s x' (got '{found}')")]
    MissingSampleName {
        /// Text of the token encountered.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// `get_stat` called with something other than a string literal first.
    #[error("Parse error at line {line}, column {column}: get_stat expects a statistic name string as its first argument, e.g. get_stat(\"mean\", s) (got '{found}')")]
    InvalidStatArgument {
        /// Text of the token encountered.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A number literal that does not fit an `f64`.
    #[error("Parse error at line {line}, column {column}: invalid number literal (got '{found}')")]
    InvalidNumber {
        /// Text of the token encountered.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Parentheses, negations, calls or blocks nested beyond the limit.
    #[error("Parse error at line {line}, column {column}: nesting deeper than {limit} levels (got '{found}')")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// Text of the token encountered.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The lexer failed while the parser was pulling the next token.
    #[error(transparent)]
    Lex(#[from] LexError),
}
