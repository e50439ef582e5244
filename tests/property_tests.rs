use mparse::grammar::expression;
use mparse::parser::{ParseResultExt, any_char, any_of, literal, n, range, some, some_span};
use proptest::prelude::*;

proptest! {
    #[test]
    fn literal_matches_its_own_character(ch in any::<char>(), tail in ".*") {
        let input = format!("{ch}{tail}");
        let result = literal(ch).run(&input);
        prop_assert!(result.is_success());
        prop_assert_eq!(result.remaining().as_str(), tail.as_str());
        prop_assert_eq!(result.into_value().as_str(), ch.to_string());
    }

    #[test]
    fn literal_rejects_other_characters(ch in any::<char>(), input in ".*") {
        prop_assume!(!input.starts_with(ch));
        let result = literal(ch).run(&input);
        prop_assert!(!result.is_success());
        prop_assert_eq!(result.remaining().as_str(), input.as_str());
    }

    #[test]
    fn or_else_prefers_the_left_success(input in "[a-z]{0,8}") {
        let left = some_span(range('a', 'm'));
        let both = left.clone().or_else(any_char());
        prop_assert_eq!(both.run(&input), left.run(&input));
    }

    #[test]
    fn some_never_fails(input in ".*") {
        let result = some(any_of("ab")).run(&input);
        prop_assert!(result.is_success());
        prop_assert!(result.remaining().len() <= input.len());
    }

    #[test]
    fn n_stops_at_its_count(count in 1usize..8, tail in "[b-z]{0,4}") {
        let exact = format!("{}{tail}", "a".repeat(count));
        let result = n(literal('a'), count).run(&exact);
        prop_assert_eq!(result.value().len(), count);
        prop_assert_eq!(result.remaining().offset(), count);

        let short = format!("{}{tail}", "a".repeat(count - 1));
        prop_assert!(!n(literal('a'), count).run(&short).is_success());
    }

    #[test]
    fn contiguous_matches_fuse(tail in "[^a]*") {
        let input = format!("aaa{tail}");
        let result = some_span(literal('a')).run(&input);
        prop_assert_eq!(result.remaining().as_str(), tail.as_str());
        prop_assert_eq!(result.into_value().as_str(), "aaa");
    }

    #[test]
    fn parsing_is_repeatable(input in "[0-9+*() ]{0,12}") {
        let parser = expression();
        prop_assert_eq!(parser.run(&input), parser.run(&input));
    }
}
