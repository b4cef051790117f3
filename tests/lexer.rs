use pushkin::{LexError, Token, TokenKind, tokenize};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"))
                    .into_iter()
                    .map(|t| t.kind)
                    .collect()
}

#[test]
fn number_and_end_of_input() {
    let tokens = tokenize("51").unwrap();
    assert_eq!(tokens,
               [Token::new(TokenKind::Number, "51", 1, 1),
                Token::new(TokenKind::EndOfInput, "", 1, 3)]);
}

#[test]
fn empty_source_yields_only_end_of_input() {
    assert_eq!(tokenize("").unwrap(),
               [Token::new(TokenKind::EndOfInput, "", 1, 1)]);
}

#[test]
fn identifiers_and_keywords() {
    assert_eq!(kinds("new print foo _bar9"),
               [TokenKind::New,
                TokenKind::Print,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput]);
}

#[test]
fn keyword_prefixes_stay_identifiers() {
    let tokens = tokenize("newx printer new_ News").unwrap();
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].text, "newx");
    assert_eq!(tokens[1].text, "printer");
}

#[test]
fn operators_and_delimiters() {
    assert_eq!(kinds("= + - ; ( )"),
               [TokenKind::Equals,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Semicolon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::EndOfInput]);
}

#[test]
fn variable_declaration() {
    assert_eq!(kinds("new x = 10;"),
               [TokenKind::New,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::EndOfInput]);
}

#[test]
fn adjacent_tokens_without_whitespace() {
    let tokens = tokenize("x=a+12-b;").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["x", "=", "a", "+", "12", "-", "b", ";", ""]);
}

#[test]
fn comment_then_operator_on_next_line() {
    let tokens = tokenize("// c\n+").unwrap();
    assert_eq!(tokens,
               [Token::new(TokenKind::Plus, "+", 2, 1),
                Token::new(TokenKind::EndOfInput, "", 2, 2)]);
}

#[test]
fn whitespace_then_operator() {
    let tokens = tokenize(" \t+").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Plus, "+", 1, 3));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn whitespace_between_every_token() {
    assert_eq!(kinds(" + \t- \r\n ; "),
               [TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Semicolon,
                TokenKind::EndOfInput]);
}

#[test]
fn comments_are_skipped() {
    let tokens = tokenize("// this is a comment\n42 // trailing\n// last").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Number, "42", 2, 1));
    assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn comment_directly_after_token() {
    assert_eq!(kinds("x;// note\ny"),
               [TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::EndOfInput]);
}

#[test]
fn tracks_lines_and_columns() {
    let tokens = tokenize("new x = 1;\n  print(x);").unwrap();
    let print = &tokens[5];
    assert_eq!(print.kind, TokenKind::Print);
    assert_eq!((print.line, print.column), (2, 3));
    let paren = &tokens[6];
    assert_eq!((paren.line, paren.column), (2, 8));
}

#[test]
fn crlf_line_endings() {
    let tokens = tokenize("a\r\nb").unwrap();
    assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
}

#[test]
fn unexpected_character() {
    let err = tokenize("new x = 1;\nx = x * 2;").unwrap_err();
    assert_eq!(err,
               LexError::UnexpectedCharacter { character: '*',
                                               line:      2,
                                               column:    7, });
    assert_eq!(err.to_string(), "Unexpected character '*' at line 2, column 7");
}

#[test]
fn single_slash_is_not_a_comment() {
    assert!(matches!(tokenize("1 / 2"),
                     Err(LexError::UnexpectedCharacter { character: '/', .. })));
}

#[test]
fn non_ascii_character_is_reported_whole() {
    let err = tokenize("new é = 1;").unwrap_err();
    assert_eq!(err,
               LexError::UnexpectedCharacter { character: 'é',
                                               line:      1,
                                               column:    5, });
}

#[test]
fn decimal_point_is_rejected() {
    assert!(matches!(tokenize("1.5"),
                     Err(LexError::UnexpectedCharacter { character: '.', .. })));
}

#[test]
fn carriage_return_does_not_end_a_comment() {
    assert_eq!(kinds("// c\r+ y"), [TokenKind::EndOfInput]);
    assert_eq!(kinds("// c\r\n+"), [TokenKind::Plus, TokenKind::EndOfInput]);
}

#[test]
fn long_single_line() {
    let n = 200_000;
    let tokens = tokenize(&"x+".repeat(n)).unwrap();
    assert_eq!(tokens.len(), 2 * n + 1);

    let last_plus = &tokens[2 * n - 1];
    assert_eq!((last_plus.kind, last_plus.line, last_plus.column),
               (TokenKind::Plus, 1, 2 * n));
    let end = &tokens[2 * n];
    assert_eq!((end.kind, end.column), (TokenKind::EndOfInput, 2 * n + 1));
}

#[test]
fn columns_restart_on_each_line() {
    let tokens = tokenize("aaaa bbbb\ncc\n    d").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions, [(1, 1), (1, 6), (2, 1), (3, 5), (3, 6)]);
}
