//! The consumed grammar-engine contract.
//!
//! The engine owns raw lexing, dispatch-node storage, and shared-prefix
//! de-duplication. The registrar only ever drives it through this trait,
//! handing over closures for parse-time and suggestion-time callbacks.

use std::sync::Arc;

use parley_argument::{ParseContext, SuggestionInfo, Suggestions};
use parley_foundation::{CommandSender, Result, Type, Value};

/// Opaque handle to one engine-side dispatch node.
///
/// Handles are only meaningful to the engine that issued them; the
/// registrar threads them back as the path prefix of later registrations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// Parse callback for a typed node: raw token (or raw tail, for greedy
/// kinds) in, typed value out.
pub type ParseHook = Arc<dyn Fn(&ParseContext<'_>, &str) -> Result<Value> + Send + Sync>;

/// Suggestion callback for a typed node.
pub type SuggestHook = Arc<dyn Fn(&SuggestionInfo<'_>) -> Result<Suggestions> + Send + Sync>;

/// A matched command ready to run.
///
/// `args` holds the listed values in positional order — what the executor
/// sees. `tokens` holds the raw text and byte offset of every argument
/// position (literals included), which replacement enforcement walks.
#[derive(Debug)]
pub struct Invocation<'a> {
    /// Who issued the command.
    pub sender: &'a CommandSender,
    /// The full raw input line.
    pub input: &'a str,
    /// Listed argument values, in positional order.
    pub args: &'a [Value],
    /// Raw `(text, byte offset)` per argument position.
    pub tokens: &'a [(String, usize)],
}

/// Executor callback attached to the final node of an execution.
pub type CommandHandler = Arc<dyn Fn(&Invocation<'_>) -> Result<()> + Send + Sync>;

/// The node-registration API the external grammar engine exposes.
///
/// Each call takes the ordered sequence of node handles leading to the
/// parent under which the new node hangs; an empty path means the engine
/// root. De-duplicating a node that already exists along the path is the
/// engine's responsibility — command trees routinely share literal
/// prefixes across many executions.
pub trait GrammarEngine {
    /// Registers (or finds) a literal node under `path`.
    fn register_literal(&mut self, path: &[NodeHandle], name: &str) -> NodeHandle;

    /// Registers (or finds) a typed node under `path`.
    fn register_argument(
        &mut self,
        path: &[NodeHandle],
        name: &str,
        ty: Type,
        greedy: bool,
        parser: ParseHook,
        suggester: SuggestHook,
    ) -> NodeHandle;

    /// Attaches an executor to a registered node. Re-attaching replaces.
    fn attach_executor(&mut self, node: NodeHandle, handler: CommandHandler);
}
