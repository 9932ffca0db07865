//! Parley - fluent builder and dispatcher for tree-shaped command grammars
//!
//! This crate re-exports all layers of the Parley system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: parley_runtime    — REPL, demo commands, CLI
//! Layer 3: parley_engine     — Reference grammar engine (tokenize, parse, complete)
//! Layer 2: parley_dispatch   — Engine contract, registrar, configuration
//! Layer 1: parley_tree       — Builder nodes, executors, execution compilation
//!          parley_argument   — Argument kinds, suggestions, branch overlays
//! Layer 0: parley_foundation — Core types (Value, Type, Error, CommandSender)
//! ```

pub use parley_argument as argument;
pub use parley_dispatch as dispatch;
pub use parley_engine as engine;
pub use parley_foundation as foundation;
pub use parley_runtime as runtime;
pub use parley_tree as tree;
