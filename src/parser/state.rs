use std::fmt;

/// A read-only view over the part of the input that is still to be parsed.
///
/// The view never owns the text it points into. Advancing produces a new
/// view over the same buffer, so every remainder handed out by a parser is
/// a suffix of the input it was given.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Input<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// The text that has not been consumed yet.
    pub fn as_str(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// The complete buffer this view was created from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the view into the complete buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.source.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The next character, or `None` at the end of input.
    pub fn front(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Drop `count` bytes from the front of the view.
    pub fn advance(self, count: usize) -> Self {
        debug_assert!(count <= self.len(), "advanced past the end of input");
        Self {
            source: self.source,
            offset: (self.offset + count).min(self.source.len()),
        }
    }

    /// Split `count` bytes off the front, returning them as a span together
    /// with the rest of the input.
    pub fn take(self, count: usize) -> (Span<'a>, Input<'a>) {
        let rest = self.advance(count);
        let span = Span {
            source: self.source,
            start: self.offset,
            end: rest.offset,
        };
        (span, rest)
    }

    /// A zero-length span positioned at the front of the view.
    pub fn empty_span(&self) -> Span<'a> {
        Span {
            source: self.source,
            start: self.offset,
            end: self.offset,
        }
    }

    /// Number of bytes consumed between `earlier` and this view.
    pub fn consumed_since(&self, earlier: Input<'a>) -> usize {
        earlier.len() - self.len()
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input({:?} @ {})", self.as_str(), self.offset)
    }
}

/// A contiguous slice of the input buffer, addressed by byte offsets.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Span<'a> {
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `next` begins exactly where this span ends, in the same buffer.
    pub fn is_adjacent_to(&self, next: &Span<'a>) -> bool {
        std::ptr::eq(self.source, next.source) && self.end == next.start
    }

    /// Fuse this span with the one directly following it.
    ///
    /// Returns `None` when the spans are not byte-adjacent.
    pub fn merge(self, next: Span<'a>) -> Option<Span<'a>> {
        if self.is_adjacent_to(&next) {
            Some(Span {
                source: self.source,
                start: self.start,
                end: next.end,
            })
        } else {
            None
        }
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.as_str(), self.start, self.end)
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Span<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Span<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A failed parse: a diagnostic plus the position at which the grammar gave
/// up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<'a> {
    pub message: String,
    pub remaining: Input<'a>,
}

impl<'a> ParseError<'a> {
    pub fn new(remaining: Input<'a>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            remaining,
        }
    }

    /// Wrap this error as the cause of a broader one reported at the same
    /// position.
    pub fn nested(self, context: impl fmt::Display) -> Self {
        Self {
            message: format!("{context}\n\tInner: {}", self.message),
            remaining: self.remaining,
        }
    }
}

impl fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError<'_> {}

/// A successful parse: the produced value and the unconsumed suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'a, T> {
    pub value: T,
    pub remaining: Input<'a>,
}

pub type ParseResult<'a, T> = Result<Parsed<'a, T>, ParseError<'a>>;

pub fn success<'a, T>(value: T, remaining: Input<'a>) -> ParseResult<'a, T> {
    Ok(Parsed { value, remaining })
}

pub fn failure<'a, T>(remaining: Input<'a>, message: impl Into<String>) -> ParseResult<'a, T> {
    Err(ParseError::new(remaining, message))
}

/// Queries shared by both outcomes of a parse.
pub trait ParseResultExt<'a, T> {
    fn is_success(&self) -> bool;

    /// Borrow the produced value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failed parse.
    fn value(&self) -> &T;

    /// Take the produced value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failed parse.
    fn into_value(self) -> T;

    fn remaining(&self) -> Input<'a>;

    fn error_message(&self) -> Option<&str>;
}

impl<'a, T> ParseResultExt<'a, T> for ParseResult<'a, T> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn value(&self) -> &T {
        match self {
            Ok(parsed) => &parsed.value,
            Err(err) => panic!("value() called on a failed parse: {}", err.message),
        }
    }

    fn into_value(self) -> T {
        match self {
            Ok(parsed) => parsed.value,
            Err(err) => panic!("into_value() called on a failed parse: {}", err.message),
        }
    }

    fn remaining(&self) -> Input<'a> {
        match self {
            Ok(parsed) => parsed.remaining,
            Err(err) => err.remaining,
        }
    }

    fn error_message(&self) -> Option<&str> {
        match self {
            Ok(_) => None,
            Err(err) => Some(&err.message),
        }
    }
}

pub trait Parser<'a, T> {
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, T>;
}

// Allow closures to be parsers
impl<'a, T, F: Fn(Input<'a>) -> ParseResult<'a, T>> Parser<'a, T> for F {
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, T> {
        self(input)
    }
}
