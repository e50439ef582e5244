//! Primitive matchers
//!
//! Every matcher here inspects at most the front of the input, consumes
//! nothing on failure and reports the original position. Matchers that
//! consume produce the matched text as a [`Span`] so that repetitions of
//! them can be coalesced without copying.

use super::combinators::BoxedParser;
use super::contiguous::{at_least_span, some_span};
use super::state::{Input, ParseResult, Parser, Span, failure, success};

/// Diagnostic produced by [`never`].
pub const NEVER: &str = "Error: never";

const END_OF_INPUT: &str = "Error: unexpected end of input";

/// Consume the front character if `matches` accepts it.
fn front_char<'a>(
    input: Input<'a>,
    matches: impl Fn(char) -> bool,
    mismatch: impl Fn(char) -> String,
) -> ParseResult<'a, Span<'a>> {
    match input.front() {
        Some(ch) if matches(ch) => {
            let (span, rest) = input.take(ch.len_utf8());
            success(span, rest)
        }
        Some(ch) => failure(input, mismatch(ch)),
        None => failure(input, END_OF_INPUT),
    }
}

/// A parser that always fails.
pub fn never<'a, T: 'a>() -> BoxedParser<'a, T> {
    fail(NEVER)
}

/// A parser that always fails with the given diagnostic.
pub fn fail<'a, T: 'a>(message: impl Into<String>) -> BoxedParser<'a, T> {
    let message = message.into();
    BoxedParser::from_fn(move |input| failure(input, message.clone()))
}

/// Succeeds with `value` without consuming input.
pub fn pure<'a, T: Clone + Send + Sync + 'a>(value: T) -> BoxedParser<'a, T> {
    BoxedParser::from_fn(move |input| success(value.clone(), input))
}

/// Match exactly the character `expected`.
pub fn literal<'a>(expected: char) -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(move |input| match input.front() {
        Some(ch) if ch == expected => {
            let (span, rest) = input.take(ch.len_utf8());
            success(span, rest)
        }
        Some(ch) => failure(input, format!("Expected {expected} but saw {ch}")),
        None => failure(
            input,
            format!("Expected {expected} but reached end of input"),
        ),
    })
}

/// Match a character in `first..=last`.
pub fn range<'a>(first: char, last: char) -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(move |input| {
        front_char(
            input,
            |ch| (first..=last).contains(&ch),
            |ch| format!("Error: expected [{first}-{last}] but saw {ch}"),
        )
    })
}

/// Match the exact text `expected`.
pub fn string<'a>(expected: &'a str) -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(move |input| {
        if input.as_str().starts_with(expected) {
            let (span, rest) = input.take(expected.len());
            success(span, rest)
        } else {
            let rest = input.as_str();
            if rest.is_empty() {
                return failure(
                    input,
                    format!("Error: expected {expected} but reached end of input"),
                );
            }
            let seen = rest
                .char_indices()
                .nth(expected.chars().count().max(1))
                .map_or(rest, |(end, _)| &rest[..end]);
            failure(input, format!("Error: expected {expected} but saw {seen}"))
        }
    })
}

/// Match any character contained in `set`.
pub fn any_of<'a>(set: &'a str) -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(move |input| {
        front_char(
            input,
            |ch| set.contains(ch),
            |ch| format!("Error: expected any of {set} but saw {ch}"),
        )
    })
}

/// Match any character not contained in `set`.
pub fn none_of<'a>(set: &'a str) -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(move |input| {
        front_char(
            input,
            |ch| !set.contains(ch),
            |ch| format!("Error: expected none of {set} but saw {ch}"),
        )
    })
}

pub fn any_char<'a>() -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(|input| front_char(input, |_| true, |_| String::new()))
}

/// Match a character accepted by `predicate`.
pub fn char_class<'a, F>(predicate: F) -> BoxedParser<'a, Span<'a>>
where
    F: Fn(char) -> bool + Send + Sync + 'a,
{
    BoxedParser::from_fn(move |input| {
        front_char(input, &predicate, |ch| {
            format!("Error: unexpected char {ch}")
        })
    })
}

pub fn alpha<'a>() -> BoxedParser<'a, Span<'a>> {
    char_class(|ch| ch.is_ascii_alphabetic())
}

pub fn alnum<'a>() -> BoxedParser<'a, Span<'a>> {
    char_class(|ch| ch.is_ascii_alphanumeric())
}

pub fn space<'a>() -> BoxedParser<'a, Span<'a>> {
    char_class(|ch| ch.is_ascii_whitespace())
}

/// Zero or more whitespace characters.
pub fn opt_ws<'a>() -> BoxedParser<'a, ()> {
    some_span(space()).as_value(())
}

/// One or more whitespace characters.
pub fn ws<'a>() -> BoxedParser<'a, ()> {
    at_least_span(space(), 1).as_value(())
}

/// Match a decimal digit, producing its numeric value.
pub fn digit<'a>() -> BoxedParser<'a, u32> {
    digit_range(0, 9)
}

/// Match a decimal digit whose value lies in `low..=high`.
pub fn digit_range<'a>(low: u32, high: u32) -> BoxedParser<'a, u32> {
    BoxedParser::from_fn(move |input| match input.front() {
        Some(ch) => match ch.to_digit(10) {
            Some(value) if (low..=high).contains(&value) => {
                success(value, input.advance(1))
            }
            _ => failure(
                input,
                format!("Error: expected digit [{low}-{high}] but saw {ch}"),
            ),
        },
        None => failure(input, END_OF_INPUT),
    })
}

/// Succeeds, consuming nothing, only when no input is left.
pub fn end_of_input<'a>() -> BoxedParser<'a, ()> {
    BoxedParser::from_fn(|input| match input.front() {
        None => success((), input),
        Some(ch) => failure(input, format!("Error: expected end of input but saw {ch}")),
    })
}

/// Consume one character, but only where `parser` would fail.
pub fn not<'a, T: 'a>(parser: BoxedParser<'a, T>) -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(move |input| {
        let Some(ch) = input.front() else {
            return failure(input, END_OF_INPUT);
        };
        match parser.parse(input) {
            Ok(_) => failure(input, format!("Error: unexpected {ch}")),
            Err(_) => {
                let (span, rest) = input.take(ch.len_utf8());
                success(span, rest)
            }
        }
    })
}
