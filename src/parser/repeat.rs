//! Repetition and list combinators
//!
//! All repetitions share one loop, parametrized by a [`Collector`] that
//! decides how matched values are accumulated. [`Items`] collects them into
//! a `Vec`; the span collector in [`super::contiguous`] fuses adjacent spans
//! instead.
//!
//! A repetition stops at the first failure of its item parser or when its
//! upper bound is reached. A match that consumed nothing would repeat
//! forever, so once the minimum is met such a match ends the repetition.

use log::trace;

use super::combinators::BoxedParser;
use super::state::{Input, ParseError, Parser, failure, success};

/// Accumulates the values matched by a repetition.
pub(crate) trait Collector<'a, T>: Sized {
    type Output;

    /// An empty collection for a repetition starting at `at`.
    fn start(at: Input<'a>) -> Self;

    /// Add the value matched at `at`.
    fn push(&mut self, item: T, at: Input<'a>) -> Result<(), ParseError<'a>>;

    fn finish(self) -> Self::Output;
}

/// Collects matched values in order.
pub(crate) struct Items<T> {
    items: Vec<T>,
}

impl<'a, T> Collector<'a, T> for Items<T> {
    type Output = Vec<T>;

    fn start(_at: Input<'a>) -> Self {
        Items { items: Vec::new() }
    }

    fn push(&mut self, item: T, _at: Input<'a>) -> Result<(), ParseError<'a>> {
        self.items.push(item);
        Ok(())
    }

    fn finish(self) -> Vec<T> {
        self.items
    }
}

/// What happens once a repetition has matched its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overflow {
    /// Stop and succeed with the matches so far.
    Stop,
    /// Fail if the item would match yet again.
    Fail,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    pub(crate) min: usize,
    pub(crate) max: Option<usize>,
    pub(crate) overflow: Overflow,
}

impl Bounds {
    pub(crate) const fn unbounded(min: usize) -> Self {
        Bounds {
            min,
            max: None,
            overflow: Overflow::Stop,
        }
    }

    pub(crate) const fn between(min: usize, max: usize) -> Self {
        Bounds {
            min,
            max: Some(max),
            overflow: Overflow::Stop,
        }
    }

    pub(crate) const fn at_most(max: usize) -> Self {
        Bounds {
            min: 0,
            max: Some(max),
            overflow: Overflow::Fail,
        }
    }
}

pub(crate) fn repeat<'a, T, C>(parser: BoxedParser<'a, T>, bounds: Bounds) -> BoxedParser<'a, C::Output>
where
    T: 'a,
    C: Collector<'a, T> + 'a,
    C::Output: 'a,
{
    BoxedParser::from_fn(move |start| {
        let mut collected = C::start(start);
        let mut count = 0;
        let mut input = start;
        let mut inner = String::new();

        loop {
            if bounds.overflow == Overflow::Stop && bounds.max == Some(count) {
                break;
            }
            let parsed = match parser.parse(input) {
                Ok(parsed) => parsed,
                Err(err) => {
                    inner = err.message;
                    break;
                }
            };
            if let Some(max) = bounds.max.filter(|&max| count == max) {
                trace!("repetition exceeded {max} matches at offset {}", input.offset());
                return failure(input, format!("Error: parsed more than {max} results"));
            }
            collected.push(parsed.value, input)?;
            count += 1;

            let progressed = parsed.remaining.offset() != input.offset();
            input = parsed.remaining;
            if !progressed && count >= bounds.min {
                break;
            }
        }

        if count < bounds.min {
            trace!("repetition stopped after {count} of {} matches", bounds.min);
            return failure(
                input,
                format!(
                    "Error: expected {} occurrences but only saw {count}\n\tInner: {inner}",
                    bounds.min
                ),
            );
        }
        success(collected.finish(), input)
    })
}

/// Parse zero or more occurrences
pub fn some<'a, T: 'a>(parser: BoxedParser<'a, T>) -> BoxedParser<'a, Vec<T>> {
    repeat::<T, Items<T>>(parser, Bounds::unbounded(0))
}

/// Parse zero or more occurrences, failing if there are more than `max`
pub fn some_at_most<'a, T: 'a>(parser: BoxedParser<'a, T>, max: usize) -> BoxedParser<'a, Vec<T>> {
    repeat::<T, Items<T>>(parser, Bounds::at_most(max))
}

/// Parse exactly `count` occurrences
pub fn n<'a, T: 'a>(parser: BoxedParser<'a, T>, count: usize) -> BoxedParser<'a, Vec<T>> {
    repeat::<T, Items<T>>(parser, Bounds::between(count, count))
}

/// Parse between `min` and `max` occurrences, stopping once `max` is reached
pub fn n_between<'a, T: 'a>(
    parser: BoxedParser<'a, T>,
    min: usize,
    max: usize,
) -> BoxedParser<'a, Vec<T>> {
    repeat::<T, Items<T>>(parser, Bounds::between(min, max))
}

/// Parse `min` or more occurrences
pub fn at_least<'a, T: 'a>(parser: BoxedParser<'a, T>, min: usize) -> BoxedParser<'a, Vec<T>> {
    repeat::<T, Items<T>>(parser, Bounds::unbounded(min))
}

/// Parse a list of `item`s separated by `delimiter` and followed by
/// `terminator`.
///
/// The list is read as zero or more `item delimiter` pairs followed by one
/// final bare `item`, so an empty list only parses when `item` itself can
/// match empty, and a delimiter directly before the terminator is rejected.
/// The terminator is checked but not consumed.
pub fn delimited_by<'a, T: 'a, D: 'a, S: 'a>(
    item: BoxedParser<'a, T>,
    delimiter: BoxedParser<'a, D>,
    terminator: BoxedParser<'a, S>,
) -> BoxedParser<'a, Vec<T>> {
    let leading = some(item.clone().skip(delimiter));

    BoxedParser::from_fn(move |input| {
        let leading = leading.parse(input)?;
        let mut values = leading.value;

        let last = item
            .parse(leading.remaining)
            .map_err(|err| err.nested("Error: expected list item"))?;

        if let Err(err) = terminator.parse(last.remaining) {
            trace!("list terminator missing at offset {}", last.remaining.offset());
            return Err(err.nested("Error: expected list terminator"));
        }

        values.push(last.value);
        success(values, last.remaining)
    })
}
