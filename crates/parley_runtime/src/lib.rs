//! Interactive console, demo command set, and CLI for Parley.
//!
//! # Modules
//!
//! - [`editor`] - Line editor abstraction with a rustyline implementation
//!   whose tab completion asks the dispatcher
//! - [`repl`] - The interactive read-dispatch loop
//! - [`demo`] - The bundled demonstration command set

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod repl;

pub use demo::build_demo_dispatcher;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
