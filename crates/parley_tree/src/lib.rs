//! Command tree builder and execution compilation for Parley.
//!
//! Callers assemble a tree of argument nodes with `then`-chaining, attach
//! executors to any node, and compile the tree into a flat list of
//! [`Execution`]s — one linear root-to-node argument sequence per node
//! that carries an executor.
//!
//! ```
//! use parley_argument::kinds::{IntegerKind, WordKind};
//! use parley_tree::{CommandTree, TreeLink, argument};
//!
//! let tree = CommandTree::new("give").then(
//!     argument("player", WordKind::new()).then(
//!         argument("amount", IntegerKind::new().min(1)).executes(|_sender, args| {
//!             println!("giving {}", args[1]);
//!             Ok(())
//!         }),
//!     ),
//! );
//! assert_eq!(tree.executions().len(), 1);
//! ```
//!
//! # Modules
//!
//! - [`argument_node`] - One argument descriptor plus its suggestion overlay
//! - [`node`] - Builder nodes and the parent/child linking contract
//! - [`executor`] - Sender-typed executor sets
//! - [`execution`] - Compiled executions and tree flattening

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod argument_node;
pub mod execution;
pub mod executor;
pub mod node;

pub use argument_node::Argument;
pub use execution::Execution;
pub use executor::{Executor, ExecutorFn};
pub use node::{ArgumentTree, CommandTree, Parent, TreeLink, argument, literal};
