//! Error types for the Parley system.
//!
//! Uses `thiserror` for ergonomic error definition. Construction-time
//! mistakes (bad tree assembly, bad configuration) fail fast; parse-time
//! and suggestion-time failures are recoverable per-input values that carry
//! a cursor into the offending input for user-facing diagnostics.

use std::fmt;

use thiserror::Error;

/// Convenience result type for Parley operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Parley operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about the input that produced the error.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a configuration error (a mistake in tree assembly or setup).
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration(message.into()))
    }

    /// Creates a syntax error for input that fails an argument's grammar.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
        })
    }

    /// Creates a replacement-enforcement rejection for a resolved value
    /// outside the allowed set.
    #[must_use]
    pub fn enforcement(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::EnforcementRejection {
            value: value.into(),
        })
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates an incomplete command error.
    #[must_use]
    pub fn incomplete_command() -> Self {
        Self::new(ErrorKind::IncompleteCommand)
    }

    /// Creates a missing executor implementation error.
    ///
    /// The message is caller-configured; see the registrar configuration.
    #[must_use]
    pub fn missing_executor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingExecutor(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns the byte cursor into the offending input, if known.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.context.as_ref().and_then(|c| c.cursor)
    }

    /// Returns true if this error indicates a caller configuration mistake.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Caller mistake in tree assembly or registration. Fatal, fail fast.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Raw input failed to parse against an argument's grammar.
    #[error("{message}")]
    Syntax {
        /// Description of what was expected.
        message: String,
    },

    /// A fully-resolved value is outside the enforced replacement set.
    #[error("value not permitted here: {value}")]
    EnforcementRejection {
        /// The rejected value as it appeared in the input.
        value: String,
    },

    /// The first token matched no registered command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Input ended before reaching a node that carries an executor.
    #[error("incomplete command")]
    IncompleteCommand,

    /// Input was empty or all whitespace.
    #[error("empty input")]
    EmptyInput,

    /// No executor entry matches the sender's kind.
    #[error("{0}")]
    MissingExecutor(String),

    /// Filesystem failure (dispatcher dump).
    #[error("io error: {0}")]
    Io(String),
}

/// Context about the input that produced an error.
///
/// Carries the raw command line and a byte cursor so front ends can render
/// a caret under the offending token.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The raw input line.
    pub input: Option<String>,
    /// Byte offset of the offending token within `input`.
    pub cursor: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw input line.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the byte cursor.
    #[must_use]
    pub const fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(cursor) = self.cursor {
            write!(f, "at position {cursor}")?;
        }
        if let Some(input) = &self.input {
            if self.cursor.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in {input:?}")?;
        }
        Ok(())
    }
}
