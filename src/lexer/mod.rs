//! A token-only matcher
//!
//! Splits text into typed spans without building any structure, using the
//! same combinators as the grammars. Tokens borrow from the input.

use crate::parser::{
    BoxedParser, ParseError, Parsed, Span, alnum, alpha, any_of, at_least_span, end_of_input,
    literal, not, opt_ws, range, some, some_span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Number,
    Hash,
    String,
    Punct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Span<'a>,
}

impl<'a> Token<'a> {
    /// Tokenize all of `input`, skipping whitespace between tokens.
    pub fn lex(input: &'a str) -> Result<Vec<Token<'a>>, ParseError<'a>> {
        let Parsed { value, .. } = tokens().run(input)?;
        Ok(value)
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Ident => format!("identifier '{}'", self.text),
            TokenKind::Number => format!("number '{}'", self.text),
            TokenKind::Hash => format!("hash '{}'", self.text),
            TokenKind::String => format!("string {}", self.text),
            TokenKind::Punct => format!("'{}'", self.text),
        }
    }
}

fn kind<'a>(kind: TokenKind, parser: BoxedParser<'a, Span<'a>>) -> BoxedParser<'a, Token<'a>> {
    parser.transform(move |text| Token { kind, text })
}

/// A single token at the front of the input.
pub fn token<'a>() -> BoxedParser<'a, Token<'a>> {
    let digits = at_least_span(range('0', '9'), 1);
    let number = digits.clone().or_else(literal('-').concat(digits));

    let ident = alpha()
        .or_else(literal('_'))
        .concat(some_span(alnum().or_else(any_of("-_"))));

    let hash = literal('#').concat(at_least_span(alnum(), 1));

    let quote = literal('"');
    let string = quote
        .clone()
        .concat(some_span(not(quote.clone())))
        .concat(quote);

    let punct = any_of("{}[]():;,.%+-*/=<>");

    kind(TokenKind::Number, number)
        .or_else(kind(TokenKind::Ident, ident))
        .or_else(kind(TokenKind::Hash, hash))
        .or_else(kind(TokenKind::String, string))
        .or_else(kind(TokenKind::Punct, punct))
}

/// Every token of the input, which must contain nothing else.
pub fn tokens<'a>() -> BoxedParser<'a, Vec<Token<'a>>> {
    opt_ws()
        .then(some(token().skip(opt_ws())))
        .skip(end_of_input())
}
