use mparse::lexer::{Token, TokenKind};

fn kinds(tokens: &[Token<'_>]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn lex_rule() {
    let tokens = Token::lex("width: 10px;").unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Ident,
            TokenKind::Punct,
            TokenKind::Number,
            TokenKind::Ident,
            TokenKind::Punct,
        ]
    );
    assert_eq!(tokens[2].text, "10");
    assert_eq!(tokens[3].text, "px");
}

#[test]
fn lex_identifiers() {
    let tokens = Token::lex("foo bar-baz _qux").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Ident));
    assert_eq!(tokens[1].text, "bar-baz");
}

#[test]
fn lex_numbers() {
    let tokens = Token::lex("42 0 -7").unwrap();
    assert_eq!(kinds(&tokens), vec![TokenKind::Number; 3]);
    assert_eq!(tokens[2].text, "-7");
}

#[test]
fn lex_hash_and_strings() {
    let tokens = Token::lex(r##"#A87F01 "a b""##).unwrap();
    assert_eq!(kinds(&tokens), vec![TokenKind::Hash, TokenKind::String]);
    assert_eq!(tokens[1].text, "\"a b\"");
}

#[test]
fn tokens_point_into_input() {
    let input = "  a  bc";
    let tokens = Token::lex(input).unwrap();
    assert_eq!((tokens[1].text.start(), tokens[1].text.end()), (5, 7));
}

#[test]
fn lex_empty_input() {
    assert!(Token::lex("").unwrap().is_empty());
    assert!(Token::lex("  \n ").unwrap().is_empty());
}

#[test]
fn lex_rejects_unknown_characters() {
    let err = Token::lex("a @").unwrap_err();
    assert_eq!(err.message, "Error: expected end of input but saw @");
    assert_eq!(err.remaining.as_str(), "@");
}

#[test]
fn describe_tokens() {
    let tokens = Token::lex("foo { 1").unwrap();
    assert_eq!(tokens[0].describe(), "identifier 'foo'");
    assert_eq!(tokens[1].describe(), "'{'");
    assert_eq!(tokens[2].describe(), "number '1'");
}
