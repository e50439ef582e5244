use std::thread;

use mparse::grammar::expression;
use mparse::parser::{
    BoxedParser, ParseResultExt, Parser, Span, any_char, digit, literal, n_span, range, some, string,
};

#[test]
fn or_else_is_left_biased() {
    let parser = literal('a').as_value(1).or_else(string("ab").as_value(2));
    let result = parser.run("ab");
    assert_eq!(*result.value(), 1);
    assert_eq!(result.remaining().as_str(), "b");
}

#[test]
fn or_else_retries_from_the_same_position() {
    let parser = string("ab").or_else(string("ac"));
    let result = parser.run("acd");
    assert_eq!(*result.value(), "ac");
    assert_eq!(result.remaining().as_str(), "d");
}

#[test]
fn or_else_reports_the_last_failure() {
    let parser = literal('a') | literal('b');
    let result = parser.run("c");
    assert_eq!(result.error_message(), Some("Expected b but saw c"));
}

#[test]
fn then_keeps_right_and_skip_keeps_left() {
    let result = literal('a').then(literal('b')).run("abc");
    assert_eq!(*result.value(), "b");
    assert_eq!(result.remaining().as_str(), "c");

    let result = literal('a').skip(literal('b')).run("abc");
    assert_eq!(*result.value(), "a");
    assert_eq!(result.remaining().as_str(), "c");
}

#[test]
fn sequence_failure_reports_inner_position() {
    let result = literal('a').then(literal('b')).run("ax");
    assert_eq!(result.error_message(), Some("Expected b but saw x"));
    assert_eq!(result.remaining().as_str(), "x");
}

#[test]
fn operators_compose() {
    let pair = digit() + digit();
    assert_eq!(pair.run("12").into_value(), (1, 2));

    let parenthesized = literal('(') * digit() - literal(')');
    assert_eq!(parenthesized.run("(5)").into_value(), 5);

    let doubled = digit() >> |value: u32| value * 2;
    assert_eq!(doubled.run("4").into_value(), 8);
}

#[test]
fn and_then_builds_from_the_value() {
    let counted = digit().and_then(|count: u32| n_span(any_char(), count as usize));
    let result = counted.run("3abcd");
    assert_eq!(*result.value(), "abc");
    assert_eq!(result.remaining().as_str(), "d");
}

#[test]
fn and_not_rejects_forbidden_follower() {
    let parser = range('a', 'z').and_not(literal('x'));

    let result = parser.run("abc");
    assert_eq!(*result.value(), "a");
    assert_eq!(result.remaining().as_str(), "bc");

    let result = parser.run("axy");
    assert!(
        result
            .error_message()
            .is_some_and(|message| message.starts_with("Expected failure but parsed"))
    );
    assert_eq!(result.remaining().as_str(), "axy");
}

#[test]
fn and_not_looks_past_the_match() {
    let parser = range('a', 'z').and_not(literal('x'));
    assert_eq!(parser.run("xyz").into_value(), "x");
}

#[test]
fn and_not_inside_repetition() {
    let parser = n_span(range('a', 'z').and_not(literal('x')), 4);
    assert!(parser.run("abyz").is_success());
    assert!(!parser.run("uvxy").is_success());
}

#[test]
fn transform_and_as_value() {
    let upper = any_char().transform(|span: Span<'_>| span.as_str().to_uppercase());
    assert_eq!(upper.run("q").into_value(), "Q");

    let unit = literal('x').as_value("ex");
    assert_eq!(unit.run("x").into_value(), "ex");
}

#[test]
fn optional_never_fails() {
    let parser = literal('a').optional();
    let result = parser.run("b");
    assert_eq!(*result.value(), None);
    assert_eq!(result.remaining().as_str(), "b");
    assert!(parser.run("a").into_value().is_some());
}

#[test]
fn trim_allows_surrounding_whitespace() {
    let result = literal('a').trim().run("  a  b");
    assert_eq!(*result.value(), "a");
    assert_eq!(result.remaining().as_str(), "b");

    let result = literal('a').ignoring(literal('_')).run("_a_b");
    assert_eq!(result.remaining().as_str(), "b");
}

#[test]
fn label_replaces_the_message() {
    let result = digit().label("a digit").run("x");
    assert_eq!(result.error_message(), Some("Error: expected a digit"));
}

#[test]
fn running_twice_gives_identical_outcomes() {
    let parser = some(literal('a'));
    assert_eq!(parser.run("aab"), parser.run("aab"));

    let failing = literal('a').then(literal('b'));
    assert_eq!(failing.run("ax"), failing.run("ax"));
}

#[test]
fn parsers_are_shareable_across_threads() {
    let parser = expression();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(parser.run("(1+2)*8").into_value(), 24);
            });
        }
    });
}

#[test]
fn custom_parser_from_closure() {
    let twice = BoxedParser::from_fn(|input| {
        let first = any_char().parse(input)?;
        let ch = first.value.as_str().chars().next().unwrap_or('\0');
        literal(ch).parse(first.remaining)
    });
    assert!(twice.run("aa").is_success());
    assert!(!twice.run("ab").is_success());
}
