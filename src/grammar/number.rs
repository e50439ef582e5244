//! Number parsers shared by the grammars

use crate::parser::{
    BoxedParser, Span, char_class, digit, digit_range, fail, literal, n_between, n_span, pure,
    some, string,
};

fn combine_digits(first: u32, rest: &[u32]) -> Option<i64> {
    rest.iter().try_fold(i64::from(first), |value, &digit| {
        value.checked_mul(10)?.checked_add(i64::from(digit))
    })
}

/// positive := [1-9] [0-9]*
fn positive_integer<'a>() -> BoxedParser<'a, i64> {
    digit_range(1, 9).and_then(|first| {
        some(digit()).and_then(move |rest| match combine_digits(first, &rest) {
            Some(value) => pure(value),
            None => fail("Error: integer out of range"),
        })
    })
}

/// integer := positive | "0" | "-" positive
///
/// Leading zeros and negative zero are rejected.
pub fn integer<'a>() -> BoxedParser<'a, i64> {
    let positive = positive_integer();
    let zero = digit_range(0, 0).and_not(digit()).as_value(0);
    let negative = literal('-')
        .then(positive.clone())
        .transform(|value: i64| -value);

    positive.or_else(zero).or_else(negative)
}

/// Any single hexadecimal digit character.
pub fn hex_digit<'a>() -> BoxedParser<'a, Span<'a>> {
    char_class(|ch| ch.is_ascii_hexdigit())
}

/// A hexadecimal digit, producing its value.
pub fn hexit<'a>() -> BoxedParser<'a, u8> {
    hex_digit().and_then(|digit: Span<'a>| match u8::from_str_radix(digit.as_str(), 16) {
        Ok(value) => pure(value),
        Err(_) => fail(format!("Error: invalid hex digit {digit}")),
    })
}

/// One or two hexadecimal digits.
pub fn hex_byte<'a>() -> BoxedParser<'a, u8> {
    n_between(hexit(), 1, 2).transform(|hexits: Vec<u8>| {
        hexits.iter().fold(0, |value, &hexit| (value << 4) | hexit)
    })
}

/// byte := ("0x" | "0X") hex hex | [0-9]{1,3}
pub fn byte<'a>() -> BoxedParser<'a, u8> {
    let hex = string("0x")
        .or_else(string("0X"))
        .then(n_span(hex_digit(), 2))
        .and_then(|digits: Span<'a>| match u8::from_str_radix(digits.as_str(), 16) {
            Ok(value) => pure(value),
            Err(_) => fail(format!("Error: invalid hex byte {digits}")),
        });

    let decimal = n_between(digit(), 1, 3).and_then(|digits: Vec<u32>| {
        let value = digits.iter().fold(0, |value, &digit| value * 10 + digit);
        match u8::try_from(value) {
            Ok(value) => pure(value),
            Err(_) => fail(format!("Error: byte value {value} out of range")),
        }
    });

    hex.or_else(decimal)
}
