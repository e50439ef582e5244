//! The combinator engine
//!
//! - `state`: input views, spans and parse outcomes
//! - `primitives`: single-character, literal and end-of-input matchers
//! - `combinators`: `BoxedParser` and the sequencing/alternation algebra
//! - `repeat`: repetitions and delimiter-driven lists collecting into a `Vec`
//! - `contiguous`: repetitions over span parsers that fuse adjacent matches
//! - `recursive`: self-referential parser construction

mod combinators;
mod contiguous;
mod primitives;
mod recursive;
mod repeat;
mod state;

pub use combinators::*;
pub use contiguous::{at_least_span, n_span, n_span_between, sequence, some_span, some_span_at_most};
pub use primitives::*;
pub use recursive::*;
pub use repeat::{at_least, delimited_by, n, n_between, some, some_at_most};
pub use state::*;
