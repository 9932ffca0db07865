//! The argument-descriptor contract.

use parley_foundation::{CommandSender, Result, Type, Value};

use crate::suggestions::{SuggestionInfo, Suggestions};

/// Context handed to an argument kind at parse time.
///
/// Carries the sender and enough of the raw input to attach a cursor to
/// parse failures.
#[derive(Debug)]
pub struct ParseContext<'a> {
    /// Who issued the command.
    pub sender: &'a CommandSender,
    /// The full raw input line.
    pub input: &'a str,
    /// Byte offset of the token being parsed within `input`.
    pub cursor: usize,
    /// Values resolved for the preceding argument positions, for kinds
    /// whose grammar depends on earlier arguments.
    pub previous: &'a [Value],
}

impl<'a> ParseContext<'a> {
    /// Creates a parse context.
    #[must_use]
    pub const fn new(
        sender: &'a CommandSender,
        input: &'a str,
        cursor: usize,
        previous: &'a [Value],
    ) -> Self {
        Self {
            sender,
            input,
            cursor,
            previous,
        }
    }
}

/// The capability contract every argument type exposes.
///
/// Concrete kinds are plain structs composing behavior; there is no
/// inheritance chain. The tree, registrar, and engine only ever see this
/// trait through an `Arc<dyn ArgumentKind>`.
pub trait ArgumentKind: Send + Sync {
    /// Parses one raw token (or, for greedy kinds, the raw tail of the
    /// input) into a typed value.
    ///
    /// # Errors
    ///
    /// Returns a syntax error, with the offending cursor in its context,
    /// when the raw text does not satisfy this kind's grammar.
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> Result<Value>;

    /// The primitive type tag this kind resolves to.
    fn primitive_type(&self) -> Type;

    /// Default completion candidates for this kind.
    ///
    /// Consulted only when no suggestion override applies at the position
    /// being typed.
    fn default_suggestions(&self, info: &SuggestionInfo<'_>) -> Suggestions {
        let _ = info;
        Suggestions::none()
    }

    /// True for fixed-word literal nodes.
    fn is_literal(&self) -> bool {
        false
    }

    /// True if this kind consumes the remainder of the input line.
    fn is_greedy(&self) -> bool {
        false
    }

    /// True if this kind contributes a value to the executor's argument
    /// list. Literals are unlisted: they shape the path but executors never
    /// see them.
    fn is_listed(&self) -> bool {
        true
    }
}
