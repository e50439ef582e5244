//! Recursive parser construction
//!
//! Parsers are immutable values built eagerly, so a grammar rule that refers
//! to itself needs an indirection: a [`Recursive`] declares a write-once cell,
//! hands out read-through handles to it while the definition is being built,
//! and is then tied to the finished definition.
//!
//! Every handle shares ownership of the cell, so any parser built from a
//! handle keeps the finished definition alive for as long as it exists.
//! A self-referential definition therefore owns itself through its handles
//! and is never freed; grammars are expected to be built once and kept.

use std::sync::{Arc, OnceLock};

use log::debug;

use super::combinators::BoxedParser;
use super::primitives::NEVER;
use super::state::{Parser, failure};

type Cell<'a, T> = OnceLock<BoxedParser<'a, T>>;

/// A parser that is declared before it is defined.
pub struct Recursive<'a, T> {
    cell: Arc<Cell<'a, T>>,
}

impl<'a, T: 'a> Recursive<'a, T> {
    pub fn new() -> Self {
        Recursive {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// A parser that forwards to the eventual definition.
    ///
    /// Before [`Recursive::tie`] it fails like [`super::never`].
    pub fn handle(&self) -> BoxedParser<'a, T> {
        let cell = Arc::clone(&self.cell);
        BoxedParser::from_fn(move |input| match cell.get() {
            Some(definition) => definition.parse(input),
            None => failure(input, NEVER),
        })
    }

    /// Seal the declaration with its definition and return the definition.
    ///
    /// Consumes the declaration, so a definition can be supplied only once.
    pub fn tie(self, definition: BoxedParser<'a, T>) -> BoxedParser<'a, T> {
        let tied = self.cell.set(definition.clone()).is_ok();
        debug_assert!(tied, "recursive parser tied twice");
        debug!(
            "tied recursive parser producing {}",
            std::any::type_name::<T>()
        );
        definition
    }
}

impl<'a, T: 'a> Default for Recursive<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a parser whose definition refers to itself.
///
/// `build` receives a handle standing in for the parser under construction
/// and returns its definition.
pub fn recursive<'a, T: 'a, F>(build: F) -> BoxedParser<'a, T>
where
    F: FnOnce(BoxedParser<'a, T>) -> BoxedParser<'a, T>,
{
    let declaration = Recursive::new();
    let definition = build(declaration.handle());
    declaration.tie(definition)
}
