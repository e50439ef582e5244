//! Grammars built from the combinator engine
//!
//! - `number`: integers, hex digits and bytes
//! - `expression`: arithmetic over `+`, `*` and parentheses
//! - `json`: a JSON subset without string escapes or fractions
//! - `stylesheet`: a CSS-like language of selectors and rules

pub mod expression;
pub mod json;
pub mod number;
pub mod stylesheet;

pub use expression::expression;
pub use json::{document, json};
pub use number::{byte, hex_byte, hexit, integer};
pub use stylesheet::stylesheet;
