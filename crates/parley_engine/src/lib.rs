//! Reference grammar engine for Parley.
//!
//! Implements the [`parley_dispatch::GrammarEngine`] contract with an
//! arena-backed dispatch-node graph, then parses live console input
//! against it:
//!
//! ```text
//! "give alice dirt 64"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [give@0, alice@5, dirt@11, 64@16]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NODE GRAPH      │  → give ─ <player> ─ <item> ─ <amount>
//! │ WALK            │    (declaration order, backtracking)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HANDLER         │  → executor(sender, [alice, dirt, 64])
//! └─────────────────┘
//! ```
//!
//! Completion requests walk the same graph over the already-complete
//! tokens and gather candidates from every viable child of every node
//! still standing.
//!
//! # Modules
//!
//! - [`tokenizer`] - Offset-preserving input tokenization
//! - [`graph`] - The dispatch-node arena and engine-contract impl
//! - [`dispatch`] - Backtracking parse and executor routing
//! - [`complete`] - Completion resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complete;
pub mod dispatch;
pub mod graph;
pub mod tokenizer;

pub use complete::Completions;
pub use graph::CommandDispatcher;
pub use tokenizer::{Token, Tokenizer};
