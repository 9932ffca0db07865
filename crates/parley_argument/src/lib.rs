//! Argument descriptors and the suggestion system for Parley.
//!
//! This crate defines the contract every argument type satisfies
//! ([`ArgumentKind`]), the built-in family of concrete kinds, suggestion
//! providers ([`ArgumentSuggestions`]), and the positional, value-keyed
//! suggestion override tree ([`SuggestionsBranch`]).
//!
//! # Modules
//!
//! - [`kind`] - The argument-descriptor contract and parse context
//! - [`kinds`] - Built-in argument kinds (literal, strings, numerics, bool)
//! - [`suggestions`] - Candidate providers and deferred suggestion handles
//! - [`branch`] - Branching suggestion overrides and replacement enforcement

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod branch;
pub mod kind;
pub mod kinds;
pub mod suggestions;

pub use branch::{SuggestionLookup, SuggestionsBranch};
pub use kind::{ArgumentKind, ParseContext};
pub use kinds::{
    BoolKind, FloatKind, GreedyStringKind, IntegerKind, LiteralKind, QuotedStringKind, WordKind,
};
pub use suggestions::{ArgumentSuggestions, Suggestion, SuggestionInfo, Suggestions};
