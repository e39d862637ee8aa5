use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Classifies a [`Token`].
///
/// The set is closed: end of input, identifiers, literals, the four keywords
/// and the operator/punctuation tokens of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned forever once the source is exhausted.
    EndOfInput,
    /// Variable, sample or function names such as `x` or `get_stat`.
    Identifier,
    /// Numeric literal tokens, such as `3` or `2.75`.
    Number,
    /// Double-quoted string literal; the token text holds the decoded
    /// contents without quotes.
    StringLiteral,
    /// `repeat`
    Repeat,
    /// `collect`
    Collect,
    /// `print`
    Print,
    /// `if`
    If,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
}

/// A lexical token with its source position.
///
/// Tokens are produced one at a time by [`Lexer::next_token`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The token text. For string literals this is the decoded contents.
    pub text:   String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// Returns `true` for the end-of-input token.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Failure categories reported by the raw scanner.
///
/// Positions are attached later by [`Lexer`], which knows the line and
/// column of the failing slice.
#[derive(Debug, Clone, PartialEq, Default)]
enum ScanError {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    NewlineInString,
    InvalidEscape(char),
    MalformedNumber,
}

/// Raw token stream recognized by `logos`.
///
/// Whitespace and `//` comments are skipped here; keywords win over
/// identifiers of the same length, longer identifiers such as `repeat_x`
/// stay identifiers.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = ScanError)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    #[regex(r"[0-9]+", scan_number)]
    Number,
    #[token("\"", scan_string)]
    Str(String),
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[token("repeat")]
    Repeat,
    #[token("collect")]
    Collect,
    #[token("print")]
    Print,
    #[token("if")]
    If,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("<=")]
    LessEqual,
    #[token("=")]
    Assign,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
}

/// Extends an integer part with an optional `.digits` fraction.
///
/// A second `.`, a `.` without digits after it, or an identifier character
/// directly after the literal makes the whole literal malformed.
fn scan_number(lex: &mut logos::Lexer<RawToken>) -> Result<(), ScanError> {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            lex.bump(1);
            return Err(ScanError::MalformedNumber);
        }
        lex.bump(1 + digits);
    }

    match lex.remainder().chars().next() {
        Some(c) if c == '.' || c == '_' || c.is_ascii_alphanumeric() => {
            lex.bump(c.len_utf8());
            Err(ScanError::MalformedNumber)
        },
        _ => Ok(()),
    }
}

/// Reads a string literal body after the opening quote, decoding escapes.
fn scan_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, ScanError> {
    let mut decoded = String::new();
    let mut chars = lex.remainder().char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(decoded);
            },
            '\n' => return Err(ScanError::NewlineInString),
            '\\' => {
                let escaped = match chars.next() {
                    Some((_, '\\')) => '\\',
                    Some((_, '"')) => '"',
                    Some((_, 'n')) => '\n',
                    Some((_, 't')) => '\t',
                    Some((_, 'r')) => '\r',
                    Some((_, '\n')) => return Err(ScanError::NewlineInString),
                    Some((_, other)) => return Err(ScanError::InvalidEscape(other)),
                    None => return Err(ScanError::UnterminatedString),
                };
                decoded.push(escaped);
            },
            other => decoded.push(other),
        }
    }

    Err(ScanError::UnterminatedString)
}

/// Pull-based tokenizer over a source string.
///
/// Call [`Lexer::next_token`] repeatedly. Once the input is exhausted the
/// end-of-input token is returned on every further call. After a lexical
/// error the lexer is spent and also returns end-of-input.
///
/// # Example
/// ```
/// use probscript::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 1.5");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
///
/// let number = lexer.next_token().unwrap();
/// assert_eq!((number.kind, number.text.as_str()), (TokenKind::Number, "1.5"));
///
/// assert!(lexer.next_token().unwrap().is_end());
/// assert!(lexer.next_token().unwrap().is_end());
/// ```
pub struct Lexer<'src> {
    source: &'src str,
    inner:  logos::Lexer<'src, RawToken>,
    cursor: usize,
    line:   usize,
    column: usize,
    done:   bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at line 1, column 1 of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: RawToken::lexer(source),
               cursor: 0,
               line: 1,
               column: 1,
               done: false }
    }

    /// Returns the next token, or the lexical error that stopped the scan.
    ///
    /// # Errors
    /// Returns a [`LexError`] for an unexpected character, an unterminated
    /// string, a raw newline or unknown escape inside a string, or a
    /// malformed number literal.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.done {
            return Ok(self.end_token());
        }

        let Some(raw) = self.inner.next() else {
            self.done = true;
            return Ok(self.end_token());
        };

        let span = self.inner.span();
        let (line, column) = self.position_at(span.start);
        let slice = self.inner.slice();

        let raw = match raw {
            Ok(raw) => raw,
            Err(err) => {
                self.done = true;
                return Err(Self::locate(err, slice, line, column));
            },
        };

        let (kind, text) = match raw {
            RawToken::Str(decoded) => (TokenKind::StringLiteral, decoded),
            other => (Self::kind_of(&other), slice.to_string()),
        };

        trace!(?kind, %text, line, column, "token");
        Ok(Token { kind,
                   text,
                   line,
                   column })
    }

    /// Builds the end-of-input token at the end of the source.
    fn end_token(&mut self) -> Token {
        let (line, column) = self.position_at(self.source.len());
        Token { kind: TokenKind::EndOfInput,
                text: String::new(),
                line,
                column }
    }

    /// Advances the line/column tracker to byte `offset` and returns it.
    ///
    /// Offsets only move forward; logos never rewinds.
    fn position_at(&mut self, offset: usize) -> (usize, usize) {
        if offset > self.cursor {
            for c in self.source[self.cursor..offset].chars() {
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.cursor = offset;
        }
        (self.line, self.column)
    }

    fn locate(err: ScanError, slice: &str, line: usize, column: usize) -> LexError {
        match err {
            ScanError::UnexpectedCharacter => match slice.chars().next() {
                Some('!') => LexError::LoneBang { line, column },
                found => LexError::UnexpectedCharacter { found: found.unwrap_or('\0'),
                                                         line,
                                                         column },
            },
            ScanError::UnterminatedString => LexError::UnterminatedString { line, column },
            ScanError::NewlineInString => LexError::NewlineInString { line, column },
            ScanError::InvalidEscape(escape) => LexError::InvalidEscape { escape,
                                                                          line,
                                                                          column },
            ScanError::MalformedNumber => LexError::MalformedNumber { text: slice.to_string(),
                                                                      line,
                                                                      column },
        }
    }

    const fn kind_of(raw: &RawToken) -> TokenKind {
        match raw {
            RawToken::Number => TokenKind::Number,
            RawToken::Str(_) => TokenKind::StringLiteral,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Repeat => TokenKind::Repeat,
            RawToken::Collect => TokenKind::Collect,
            RawToken::Print => TokenKind::Print,
            RawToken::If => TokenKind::If,
            RawToken::EqualEqual => TokenKind::EqualEqual,
            RawToken::BangEqual => TokenKind::BangEqual,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Greater => TokenKind::Greater,
            RawToken::Less => TokenKind::Less,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::EndOfInput => "end of input",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::StringLiteral => "string literal",
            Self::Repeat => "'repeat'",
            Self::Collect => "'collect'",
            Self::Print => "'print'",
            Self::If => "'if'",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Greater => "'>'",
            Self::Less => "'<'",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::GreaterEqual => "'>='",
            Self::LessEqual => "'<='",
        };
        write!(f, "{name}")
    }
}
