//! Span-collecting repetitions
//!
//! When the item parser produces slices of the input, consecutive matches
//! are byte-adjacent and their union is itself a slice. The combinators in
//! this module return that single [`Span`] instead of a list of spans.
//!
//! Fusing spans that are not adjacent is a contract violation: it means a
//! combinator between the matches discarded input. Debug builds assert on
//! it, release builds report it as a parse failure. Use the list variants
//! in [`super::repeat`] when the matched pieces are not contiguous.

use super::combinators::BoxedParser;
use super::repeat::{Bounds, Collector, repeat};
use super::state::{Input, ParseError, Parser, Span, success};

/// Fuse `first` with the span matched directly after it.
pub(crate) fn fuse<'a>(first: Span<'a>, next: Span<'a>, at: Input<'a>) -> Result<Span<'a>, ParseError<'a>> {
    debug_assert!(
        first.is_adjacent_to(&next),
        "matched spans {first:?} and {next:?} are not contiguous"
    );
    first.merge(next).ok_or_else(|| {
        ParseError::new(
            at,
            format!("Error: matched spans {first:?} and {next:?} are not contiguous"),
        )
    })
}

/// Collects adjacent spans into their union.
pub(crate) struct Contiguous<'a> {
    start: Input<'a>,
    span: Option<Span<'a>>,
}

impl<'a> Collector<'a, Span<'a>> for Contiguous<'a> {
    type Output = Span<'a>;

    fn start(at: Input<'a>) -> Self {
        Contiguous {
            start: at,
            span: None,
        }
    }

    fn push(&mut self, item: Span<'a>, at: Input<'a>) -> Result<(), ParseError<'a>> {
        let span = match self.span {
            Some(span) => fuse(span, item, at)?,
            None => item,
        };
        self.span = Some(span);
        Ok(())
    }

    fn finish(self) -> Span<'a> {
        self.span.unwrap_or_else(|| self.start.empty_span())
    }
}

/// Parse zero or more occurrences into one span
pub fn some_span<'a>(parser: BoxedParser<'a, Span<'a>>) -> BoxedParser<'a, Span<'a>> {
    repeat::<Span<'a>, Contiguous<'a>>(parser, Bounds::unbounded(0))
}

/// Parse zero or more occurrences into one span, failing if there are more
/// than `max`
pub fn some_span_at_most<'a>(
    parser: BoxedParser<'a, Span<'a>>,
    max: usize,
) -> BoxedParser<'a, Span<'a>> {
    repeat::<Span<'a>, Contiguous<'a>>(parser, Bounds::at_most(max))
}

/// Parse exactly `count` occurrences into one span
pub fn n_span<'a>(parser: BoxedParser<'a, Span<'a>>, count: usize) -> BoxedParser<'a, Span<'a>> {
    repeat::<Span<'a>, Contiguous<'a>>(parser, Bounds::between(count, count))
}

/// Parse between `min` and `max` occurrences into one span
pub fn n_span_between<'a>(
    parser: BoxedParser<'a, Span<'a>>,
    min: usize,
    max: usize,
) -> BoxedParser<'a, Span<'a>> {
    repeat::<Span<'a>, Contiguous<'a>>(parser, Bounds::between(min, max))
}

/// Parse `min` or more occurrences into one span
pub fn at_least_span<'a>(
    parser: BoxedParser<'a, Span<'a>>,
    min: usize,
) -> BoxedParser<'a, Span<'a>> {
    repeat::<Span<'a>, Contiguous<'a>>(parser, Bounds::unbounded(min))
}

/// Run span parsers one after another, producing the span they cover.
pub fn sequence<'a>(parsers: Vec<BoxedParser<'a, Span<'a>>>) -> BoxedParser<'a, Span<'a>> {
    BoxedParser::from_fn(move |input| {
        let mut covered = Contiguous::start(input);
        let mut rest = input;
        for parser in &parsers {
            let parsed = parser.parse(rest)?;
            covered.push(parsed.value, rest)?;
            rest = parsed.remaining;
        }
        success(covered.finish(), rest)
    })
}

impl<'a> BoxedParser<'a, Span<'a>> {
    /// Sequence two span parsers and fuse their matches into one span.
    pub fn concat(self, other: BoxedParser<'a, Span<'a>>) -> BoxedParser<'a, Span<'a>> {
        BoxedParser::from_fn(move |input| {
            let first = self.parse(input)?;
            let second = other.parse(first.remaining)?;
            let span = fuse(first.value, second.value, first.remaining)?;
            success(span, second.remaining)
        })
    }
}
