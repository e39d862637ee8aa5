use probscript::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

fn tokens(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token().unwrap_or_else(|e| panic!("lexing {src:?} failed: {e}"));
        if token.is_end() {
            break;
        }
        out.push(token);
    }
    out
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokens(src).into_iter().map(|t| t.kind).collect()
}

fn first_error(src: &str) -> LexError {
    let mut lexer = Lexer::new(src);
    loop {
        match lexer.next_token() {
            Ok(token) if token.is_end() => panic!("expected {src:?} to fail lexing"),
            Ok(_) => {},
            Err(e) => return e,
        }
    }
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::{Collect, Identifier, If, Print, Repeat};

    assert_eq!(kinds("repeat collect print if"), vec![Repeat, Collect, Print, If]);
    assert_eq!(kinds("repeat_x collected printer iffy _if"),
               vec![Identifier, Identifier, Identifier, Identifier, Identifier]);
    assert_eq!(kinds("print_stat"), vec![Identifier]);
}

#[test]
fn operators_prefer_the_longest_match() {
    use TokenKind::{
        Assign, BangEqual, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Minus, Plus,
        Slash, Star,
    };

    assert_eq!(kinds("== != >= <= = > < + - * /"),
               vec![EqualEqual, BangEqual, GreaterEqual, LessEqual, Assign, Greater, Less, Plus,
                    Minus, Star, Slash]);
    assert_eq!(kinds("a>=b"),
               vec![TokenKind::Identifier, GreaterEqual, TokenKind::Identifier]);
    assert_eq!(kinds("==="), vec![EqualEqual, Assign]);
}

#[test]
fn punctuation() {
    use TokenKind::{Comma, LBrace, LParen, RBrace, RParen};

    assert_eq!(kinds("( ) { } ,"), vec![LParen, RParen, LBrace, RBrace, Comma]);
}

#[test]
fn numbers_keep_their_text() {
    let toks = tokens("0 42 3.25 007");
    let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();

    assert!(toks.iter().all(|t| t.kind == TokenKind::Number));
    assert_eq!(texts, vec!["0", "42", "3.25", "007"]);
}

#[test]
fn negative_numbers_are_two_tokens() {
    assert_eq!(kinds("-1"), vec![TokenKind::Minus, TokenKind::Number]);
}

#[test]
fn strings_are_decoded() {
    let toks = tokens(r#""mean" "a\"b" "tab\there" "back\\slash" "nl\n""#);
    let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();

    assert!(toks.iter().all(|t| t.kind == TokenKind::StringLiteral));
    assert_eq!(texts, vec!["mean", "a\"b", "tab\there", "back\\slash", "nl\n"]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(kinds("// only a comment"), vec![]);
    assert_eq!(kinds("x // comment\n\t\r\n  y"),
               vec![TokenKind::Identifier, TokenKind::Identifier]);
    assert_eq!(kinds("a / b"),
               vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier]);
}

#[test]
fn positions_are_one_based() {
    let toks = tokens("x = 1\n  print x\n\ncollect s 2");
    let positions: Vec<(usize, usize)> = toks.iter().map(|t| (t.line, t.column)).collect();

    assert_eq!(positions,
               vec![(1, 1), (1, 3), (1, 5), (2, 3), (2, 9), (4, 1), (4, 9), (4, 11)]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x\n");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);

    let end = lexer.next_token().unwrap();
    assert!(end.is_end());
    assert_eq!((end.line, end.column), (2, 1));

    for _ in 0..3 {
        assert!(lexer.next_token().unwrap().is_end());
    }
}

#[test]
fn empty_source_is_just_end_of_input() {
    let mut lexer = Lexer::new("");
    let end = lexer.next_token().unwrap();
    assert!(end.is_end());
    assert_eq!((end.line, end.column), (1, 1));
}

#[test]
fn unexpected_characters() {
    assert!(matches!(first_error("x = 1 @ 2"),
                     LexError::UnexpectedCharacter { found: '@',
                                                     line: 1,
                                                     column: 7 }));
    assert!(matches!(first_error("x = 1 ! 2"), LexError::LoneBang { line: 1, column: 7 }));
    assert!(matches!(first_error("\n  #"), LexError::UnexpectedCharacter { line: 2, column: 3, .. }));
}

#[test]
fn broken_strings() {
    assert!(matches!(first_error("\"open"), LexError::UnterminatedString { line: 1, column: 1 }));
    assert!(matches!(first_error("\"two\nlines\""), LexError::NewlineInString { .. }));
    assert!(matches!(first_error(r#""bad \q escape""#),
                     LexError::InvalidEscape { escape: 'q', .. }));
}

#[test]
fn malformed_numbers() {
    for src in ["1.", "1.2.3", "12abc", "3_000", "1e5"] {
        assert!(matches!(first_error(src), LexError::MalformedNumber { .. }),
                "{src:?} should be a malformed number");
    }
}

#[test]
fn lexer_is_spent_after_an_error() {
    let mut lexer = Lexer::new("@ x");
    assert!(lexer.next_token().is_err());
    assert!(lexer.next_token().unwrap().is_end());
}

#[test]
fn error_messages() {
    assert_eq!(first_error("#").to_string(),
               "Lexical error at line 1, column 1: unexpected character '#'");
    assert!(first_error("!").to_string().contains("'!='"));
}
