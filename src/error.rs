/// Lexical errors.
///
/// Raised while turning source text into tokens: stray characters,
/// malformed numbers and broken string literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from the token stream. Lexical errors met while pulling tokens are carried
/// through unchanged.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution, such as
/// undefined variables, division by zero or invalid distribution parameters.
pub mod runtime_error;
/// Statistics errors.
///
/// Failures reported by the pure statistics engine before the interpreter
/// attaches a source line to them.
pub mod stat_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use stat_error::StatError;
use thiserror::Error;

/// Any failure produced while running a script.
///
/// The three phases stay distinct: a lexical error found while the parser
/// pulls tokens is reported as [`Error::Lex`], never as a parse error.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(LexError),
    /// The token stream does not form a valid program.
    #[error(transparent)]
    Parse(ParseError),
    /// Execution aborted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(lex) => Self::Lex(lex),
            other => Self::Parse(other),
        }
    }
}
