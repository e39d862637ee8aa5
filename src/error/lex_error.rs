use thiserror::Error;

/// Represents all errors that can occur while tokenizing source text.
///
/// Every variant carries the 1-based line and column where the offending
/// token started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Lexical error at line {line}, column {column}: unexpected character '{found}'")]
    UnexpectedCharacter {
        /// The character encountered.
        found:  char,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A `!` that is not followed by `=`.
    #[error("Lexical error at line {line}, column {column}: unexpected character '!' (did you mean '!='?)")]
    LoneBang {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// End of input reached before the closing `"`.
    #[error("Lexical error at line {line}, column {column}: unterminated string literal")]
    UnterminatedString {
        /// The source line where the string started.
        line:   usize,
        /// The source column where the string started.
        column: usize,
    },
    /// A raw newline inside a string literal.
    #[error("Lexical error at line {line}, column {column}: string literal cannot contain a newline")]
    NewlineInString {
        /// The source line where the string started.
        line:   usize,
        /// The source column where the string started.
        column: usize,
    },
    /// A backslash followed by an unsupported character.
    #[error("Lexical error at line {line}, column {column}: invalid escape sequence '\\{escape}'")]
    InvalidEscape {
        /// The character following the backslash.
        escape: char,
        /// The source line where the string started.
        line:   usize,
        /// The source column where the string started.
        column: usize,
    },
    /// Digits followed by a second `.`, a dangling `.` or a letter.
    #[error("Lexical error at line {line}, column {column}: malformed number literal '{text}'")]
    MalformedNumber {
        /// The text consumed so far, including the offending character.
        text:   String,
        /// The source line where the number started.
        line:   usize,
        /// The source column where the number started.
        column: usize,
    },
}
