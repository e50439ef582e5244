//! Arithmetic expressions
//!
//! ```text
//! expr   := term "+" expr | term
//! term   := factor "*" term | factor
//! factor := "(" expr ")" | integer
//! ```
//!
//! The rules are right-recursive, so the parser terminates, and the
//! expression is evaluated while it is parsed. Whitespace is allowed around
//! every token.

use crate::parser::{BoxedParser, Span, fail, literal, pure, recursive};

use super::number::integer;

fn symbol<'a>(ch: char) -> BoxedParser<'a, Span<'a>> {
    literal(ch).trim()
}

fn checked<'a>(value: Option<i64>) -> BoxedParser<'a, i64> {
    match value {
        Some(value) => pure(value),
        None => fail("Error: arithmetic overflow"),
    }
}

/// Parse and evaluate an arithmetic expression.
pub fn expression<'a>() -> BoxedParser<'a, i64> {
    recursive(|expr| {
        let factor = integer()
            .trim()
            .or_else(symbol('(').then(expr.clone()).skip(symbol(')')));

        let term = recursive(|term| {
            factor
                .clone()
                .skip(symbol('*'))
                .and_then(move |lhs| {
                    term.clone()
                        .and_then(move |rhs| checked(lhs.checked_mul(rhs)))
                })
                .or_else(factor)
        });

        term.clone()
            .skip(symbol('+'))
            .and_then(move |lhs| {
                expr.clone()
                    .and_then(move |rhs| checked(lhs.checked_add(rhs)))
            })
            .or_else(term)
    })
}
