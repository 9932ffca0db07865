//! Grammar-engine registration contract and command registrar for Parley.
//!
//! The registrar compiles a [`parley_tree::CommandTree`] into executions
//! and submits each one to a [`GrammarEngine`] — the external component
//! that owns raw token parsing and dispatch. The engine calls back through
//! the parse, suggestion, and handler hooks installed at registration.
//!
//! # Modules
//!
//! - [`engine`] - The consumed engine contract and runtime hook shapes
//! - [`registrar`] - Validation, compilation, submission, retained registry
//! - [`config`] - Read-only registrar configuration
//! - [`dump`] - Dispatcher-tree JSON dump

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dump;
pub mod engine;
pub mod registrar;

pub use config::RegistrarConfig;
pub use engine::{CommandHandler, GrammarEngine, Invocation, NodeHandle, ParseHook, SuggestHook};
pub use registrar::{CommandRegistrar, RegisteredCommand};
