//! A CSS-like stylesheet language
//!
//! ```text
//! stylesheet := selector+
//! selector   := identifier "{" rule* "}"
//! rule       := identifier ":" value ";"
//! ```
//!
//! The value grammar is chosen by the property name: `width` and `height`
//! take a dimension (`10px`, `50%`), `padding` takes one to four
//! whitespace-separated dimensions, and `color` takes `#RRGGBB` or
//! `rgb(r, g, b)`.

use crate::ast::{Color, Dimension, Rule, RuleValue, Spacing, StyleSheet, Units};
use crate::parser::{
    BoxedParser, Span, alnum, alpha, any_of, at_least, delimited_by, fail, literal, n_span,
    opt_ws, pure, some, some_span, string, ws,
};

use super::number::{byte, hex_digit, integer};

/// identifier := ("_" | "." | "#" | alpha) (alnum | "-" | "_")*
pub fn identifier<'a>() -> BoxedParser<'a, Span<'a>> {
    any_of("_.#")
        .or_else(alpha())
        .concat(some_span(alnum().or_else(any_of("-_"))))
}

/// dimension := integer ("px" | "%")
pub fn dimension<'a>() -> BoxedParser<'a, Dimension> {
    integer().and_then(|value| {
        string("px")
            .as_value(Dimension {
                value,
                units: Units::Px,
            })
            .or_else(literal('%').as_value(Dimension {
                value,
                units: Units::Pct,
            }))
    })
}

/// spacing := dimension (ws dimension){0,3}
pub fn spacing<'a>() -> BoxedParser<'a, Spacing> {
    delimited_by(dimension(), ws(), literal(';')).and_then(|values: Vec<Dimension>| {
        match Spacing::from_values(&values) {
            Some(spacing) => pure(spacing),
            None => fail(format!(
                "Error: expected 1 to 4 spacing values but saw {}",
                values.len()
            )),
        }
    })
}

fn hex_color(digits: &str) -> Option<Color> {
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
    };
    Some(Color {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// color := "#" hex{6} | "rgb" "(" byte ("," byte)* ")"
pub fn color<'a>() -> BoxedParser<'a, Color> {
    let hex = literal('#')
        .then(n_span(hex_digit(), 6))
        .and_then(|digits: Span<'a>| match hex_color(digits.as_str()) {
            Some(color) => pure(color),
            None => fail(format!("Error: invalid hex color #{digits}")),
        });

    let rgb = string("rgb")
        .skip(opt_ws())
        .then(literal('('))
        .then(delimited_by(byte().trim(), literal(',').trim(), literal(')')))
        .skip(literal(')'))
        .and_then(|channels: Vec<u8>| match channels.as_slice() {
            &[r, g, b] => pure(Color { r, g, b }),
            _ => fail(format!(
                "Error: expected 3 color channels but saw {}",
                channels.len()
            )),
        });

    hex.or_else(rgb)
}

fn rule_value<'a>(property: &str) -> Option<BoxedParser<'a, RuleValue>> {
    match property {
        "padding" => Some(spacing().transform(RuleValue::Spacing)),
        "width" | "height" => Some(dimension().transform(RuleValue::Dimension)),
        "color" => Some(color().transform(RuleValue::Color)),
        _ => None,
    }
}

/// rule := identifier ":" value ";"
pub fn rule<'a>() -> BoxedParser<'a, Rule> {
    identifier()
        .skip(opt_ws())
        .skip(literal(':'))
        .skip(opt_ws())
        .and_then(|property: Span<'a>| {
            let name = property.to_string();
            match rule_value(&name) {
                Some(value) => value.transform(move |value| Rule {
                    property: name.clone(),
                    value,
                }),
                None => fail(format!("Error: unknown property {name}")),
            }
        })
        .skip(literal(';'))
        .skip(opt_ws())
}

/// selector := identifier "{" rule* "}"
pub fn selector<'a>() -> BoxedParser<'a, (Span<'a>, Vec<Rule>)> {
    identifier()
        .skip(opt_ws())
        .skip(literal('{'))
        .skip(opt_ws())
        .seq(some(rule()))
        .skip(literal('}'))
        .skip(opt_ws())
}

/// One or more selectors, with leading whitespace allowed.
pub fn stylesheet<'a>() -> BoxedParser<'a, StyleSheet> {
    opt_ws()
        .then(at_least(selector(), 1))
        .transform(|selectors: Vec<(Span<'a>, Vec<Rule>)>| StyleSheet {
            selectors: selectors
                .into_iter()
                .map(|(name, rules)| (name.to_string(), rules))
                .collect(),
        })
}
