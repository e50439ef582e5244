//! Values produced by the bundled grammars

pub mod json;
pub mod stylesheet;

pub use json::Json;
pub use stylesheet::{Color, Dimension, Rule, RuleValue, Spacing, StyleSheet, Units};
