//! JSON
//!
//! ```text
//! json      := object | array | primitive
//! primitive := integer | string | boolean | "null"
//! array     := "[" [ json ("," json)* ] "]"
//! object    := "{" [ member ("," member)* ] "}"
//! member    := string ":" json
//! ```
//!
//! Strings have no escape sequences and numbers are integers.

use std::collections::BTreeMap;

use crate::ast::Json;
use crate::parser::{
    BoxedParser, Span, delimited_by, end_of_input, literal, not, recursive, some_span, string,
};

use super::number::integer;

fn punct<'a>(ch: char) -> BoxedParser<'a, Span<'a>> {
    literal(ch).trim()
}

/// string := '"' [^"]* '"'
pub fn string_literal<'a>() -> BoxedParser<'a, String> {
    let quote = literal('"');
    quote
        .clone()
        .then(some_span(not(quote.clone())))
        .skip(quote)
        .transform(|text: Span<'a>| text.to_string())
}

fn boolean<'a>() -> BoxedParser<'a, bool> {
    string("true")
        .as_value(true)
        .or_else(string("false").as_value(false))
}

fn primitive<'a>() -> BoxedParser<'a, Json> {
    integer()
        .transform(Json::Number)
        .or_else(string_literal().transform(Json::String))
        .or_else(boolean().transform(Json::Bool))
        .or_else(string("null").as_value(Json::Null))
}

/// A JSON value, with whitespace allowed around punctuation.
pub fn json<'a>() -> BoxedParser<'a, Json> {
    recursive(|json| {
        let member = string_literal().trim().skip(punct(':')).seq(json.clone());

        let members = delimited_by(member, punct(','), punct('}'))
            .skip(punct('}'))
            .transform(|members: Vec<(String, Json)>| Json::from(members));
        let object = punct('{').then(
            punct('}')
                .as_value(Json::Object(BTreeMap::new()))
                .or_else(members),
        );

        let items = delimited_by(json, punct(','), punct(']'))
            .skip(punct(']'))
            .transform(Json::Array);
        let array = punct('[').then(
            punct(']')
                .as_value(Json::Array(Vec::new()))
                .or_else(items),
        );

        object.or_else(array).or_else(primitive())
    })
}

/// A complete document: one value surrounded by optional whitespace and
/// nothing else.
pub fn document<'a>() -> BoxedParser<'a, Json> {
    json().trim().skip(end_of_input())
}
