//! Core types, values, and errors for Parley.
//!
//! This crate provides:
//! - [`Value`] - The dynamically-typed resolved-argument value
//! - [`Type`] - Primitive type tags reported by argument descriptors
//! - [`Error`] - Rich error types with input/cursor context
//! - [`CommandSender`] - The origin of a command invocation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod sender;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use sender::{CommandSender, SenderKind};
pub use types::Type;
pub use value::Value;
