//! # mparse - Composable Parser Combinators
//!
//! mparse is a toolkit of small parsing primitives that combine into
//! recursive-descent parsers for arbitrary grammars. A parser is an
//! immutable value describing how to consume a prefix of some text and what
//! to produce from it; combinators build bigger parsers out of smaller ones.
//!
//! ## Architecture Overview
//!
//! 1. **Engine** (`parser`) - Input views, parse outcomes, primitives and
//!    the combinator algebra
//! 2. **Grammars** (`grammar`) - Integer, arithmetic, JSON and stylesheet
//!    grammars built on the engine
//! 3. **Lexer** (`lexer`) - A token-only matcher producing typed spans
//! 4. **Values** (`ast`) - The structured values produced by the grammars
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Text (&str)
//!     ↓
//! [Input] → view over the caller's buffer
//!     ↓
//! [BoxedParser] → Parsed { value, remaining } | ParseError { message, remaining }
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Outcomes Carry Positions
//! A success reports the unconsumed suffix of its input. A failure reports
//! the position where the grammar gave up, which for compound parsers is
//! where the failing sub-parser was attempted rather than where the whole
//! attempt began. Diagnostics are flat strings; nested causes are chained
//! into the message.
//!
//! ### Spans Instead of Copies
//! Character matchers produce [`parser::Span`]s into the input. The span
//! repetitions (`some_span`, `n_span`, ...) fuse adjacent matches into one
//! span instead of collecting a list, so matching a run of characters never
//! allocates. The list repetitions (`some`, `n`, `delimited_by`, ...)
//! collect any value type into a `Vec`.
//!
//! ### Recursion Through a Write-Once Cell
//! [`parser::recursive`] hands the grammar builder a handle to a parser that
//! does not exist yet, then seals the handle's cell with the finished
//! definition. Every handle shares ownership of the cell, so parsers derived
//! from a handle keep the definition alive.
//!
//! ### Shareable Parsers
//! [`parser::BoxedParser`] is an `Arc` around a `Send + Sync` closure. Parsers
//! never mutate captured state, so one parser can be cloned freely and run
//! against many inputs, from many threads.
//!
//! ## Example
//!
//! ```
//! use mparse::parser::{ParseResultExt, digit, literal, some};
//!
//! let sum = digit()
//!     .skip(literal('+'))
//!     .seq(digit())
//!     .transform(|(a, b)| a + b);
//!
//! assert_eq!(sum.run("3+4").into_value(), 7);
//! assert_eq!(some(literal('a')).run("aab").into_value().len(), 2);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - The combinator engine
//! - [`grammar`] - Grammars built on the engine
//! - [`lexer`] - Token matcher
//! - [`ast`] - Grammar output values

pub mod ast;
pub mod grammar;
pub mod lexer;
pub mod parser;
