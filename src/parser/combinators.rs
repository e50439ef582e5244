use std::fmt::Debug;
use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use super::primitives::opt_ws;
use super::state::{Input, ParseError, ParseResult, Parsed, Parser, success};

type ParserFn<'a, T> = Arc<dyn Fn(Input<'a>) -> ParseResult<'a, T> + Send + Sync + 'a>;

// === Boxed Parser for type erasure ===

/// A type-erased, immutable parser producing values of type `T`.
///
/// Cloning is cheap and shares the underlying definition. Parsers carry no
/// mutable state, so one value may be invoked repeatedly or from several
/// threads at once.
pub struct BoxedParser<'a, T> {
    parser: ParserFn<'a, T>,
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'a, T: 'a> BoxedParser<'a, T> {
    pub fn new<P: Parser<'a, T> + Send + Sync + 'a>(parser: P) -> Self {
        BoxedParser {
            parser: Arc::new(move |input| parser.parse(input)),
        }
    }

    pub fn from_fn<F>(parse: F) -> Self
    where
        F: Fn(Input<'a>) -> ParseResult<'a, T> + Send + Sync + 'a,
    {
        BoxedParser {
            parser: Arc::new(parse),
        }
    }

    /// Run the parser against the start of `text`.
    pub fn run(&self, text: &'a str) -> ParseResult<'a, T> {
        (self.parser)(Input::new(text))
    }
}

impl<'a, T> Parser<'a, T> for BoxedParser<'a, T> {
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, T> {
        (self.parser)(input)
    }
}

// === Combinators as methods ===

impl<'a, T: 'a> BoxedParser<'a, T> {
    /// Choice: try self, if it fails try other against the same input.
    ///
    /// Left-biased: once self succeeds, other is never attempted.
    pub fn or_else(self, other: BoxedParser<'a, T>) -> BoxedParser<'a, T> {
        BoxedParser::from_fn(move |input| match self.parse(input) {
            Ok(parsed) => Ok(parsed),
            Err(_) => other.parse(input),
        })
    }

    /// Bind: parse self, then build the next parser from the value and run
    /// it on the remainder.
    pub fn and_then<U: 'a, F>(self, next: F) -> BoxedParser<'a, U>
    where
        F: Fn(T) -> BoxedParser<'a, U> + Send + Sync + 'a,
    {
        BoxedParser::from_fn(move |input| {
            let Parsed { value, remaining } = self.parse(input)?;
            next(value).parse(remaining)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn then<U: 'a>(self, other: BoxedParser<'a, U>) -> BoxedParser<'a, U> {
        BoxedParser::from_fn(move |input| {
            let first = self.parse(input)?;
            other.parse(first.remaining)
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'a>(self, other: BoxedParser<'a, U>) -> BoxedParser<'a, T> {
        BoxedParser::from_fn(move |input| {
            let first = self.parse(input)?;
            let second = other.parse(first.remaining)?;
            success(first.value, second.remaining)
        })
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'a>(self, other: BoxedParser<'a, U>) -> BoxedParser<'a, (T, U)> {
        BoxedParser::from_fn(move |input| {
            let first = self.parse(input)?;
            let second = other.parse(first.remaining)?;
            success((first.value, second.value), second.remaining)
        })
    }

    /// Negative lookahead: succeed with self's match only when `forbidden`
    /// does not match directly after it.
    pub fn and_not<U: Debug + 'a>(self, forbidden: BoxedParser<'a, U>) -> BoxedParser<'a, T> {
        BoxedParser::from_fn(move |input| {
            let parsed = self.parse(input)?;
            match forbidden.parse(parsed.remaining) {
                Ok(unexpected) => Err(ParseError::new(
                    input,
                    format!("Expected failure but parsed {:?}", unexpected.value),
                )),
                Err(_) => Ok(parsed),
            }
        })
    }

    /// Map: transform result
    pub fn transform<U: 'a, F>(self, f: F) -> BoxedParser<'a, U>
    where
        F: Fn(T) -> U + Send + Sync + 'a,
    {
        BoxedParser::from_fn(move |input| {
            let Parsed { value, remaining } = self.parse(input)?;
            success(f(value), remaining)
        })
    }

    /// Replace the result with a constant.
    pub fn as_value<U: Clone + Send + Sync + 'a>(self, value: U) -> BoxedParser<'a, U> {
        self.transform(move |_| value.clone())
    }

    /// Optional: parse zero or one, never fails.
    pub fn optional(self) -> BoxedParser<'a, Option<T>> {
        BoxedParser::from_fn(move |input| match self.parse(input) {
            Ok(Parsed { value, remaining }) => success(Some(value), remaining),
            Err(_) => success(None, input),
        })
    }

    /// Parse self with `ignore` allowed on either side of it.
    pub fn ignoring<U: 'a>(self, ignore: BoxedParser<'a, U>) -> BoxedParser<'a, T> {
        let bare = self.clone().skip(ignore.clone());
        let padded = ignore.clone().then(self).skip(ignore);
        bare.or_else(padded)
    }

    /// Parse self surrounded by optional whitespace.
    pub fn trim(self) -> BoxedParser<'a, T> {
        self.ignoring(opt_ws())
    }

    /// Replace the diagnostic of a failure with the name of what was expected.
    pub fn label(self, name: &'static str) -> BoxedParser<'a, T> {
        BoxedParser::from_fn(move |input| {
            self.parse(input)
                .map_err(|err| ParseError::new(err.remaining, format!("Error: expected {name}")))
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<'a, T: 'a, U: 'a> Add<BoxedParser<'a, U>> for BoxedParser<'a, T> {
    type Output = BoxedParser<'a, (T, U)>;

    fn add(self, rhs: BoxedParser<'a, U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<'a, T: 'a, U: 'a> Sub<BoxedParser<'a, U>> for BoxedParser<'a, T> {
    type Output = BoxedParser<'a, T>;

    fn sub(self, rhs: BoxedParser<'a, U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<'a, T: 'a, U: 'a> Mul<BoxedParser<'a, U>> for BoxedParser<'a, T> {
    type Output = BoxedParser<'a, U>;

    fn mul(self, rhs: BoxedParser<'a, U>) -> Self::Output {
        self.then(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<'a, T: 'a> BitOr<BoxedParser<'a, T>> for BoxedParser<'a, T> {
    type Output = BoxedParser<'a, T>;

    fn bitor(self, rhs: BoxedParser<'a, T>) -> Self::Output {
        self.or_else(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<'a, T: 'a, U: 'a, F: Fn(T) -> U + Send + Sync + 'a> Shr<F> for BoxedParser<'a, T> {
    type Output = BoxedParser<'a, U>;

    fn shr(self, f: F) -> Self::Output {
        self.transform(f)
    }
}
