//! The dispatch-node arena and engine-contract implementation.
//!
//! Nodes live in a flat arena indexed by [`NodeHandle`] values; parent
//! paths arrive as handle sequences from the registrar. Registering a node
//! that already exists along the path returns the existing handle instead
//! of creating a sibling — command trees routinely share literal prefixes
//! across many executions, and de-duplicating them here is this engine's
//! side of the contract.

use std::fmt;

use parley_dispatch::{CommandHandler, GrammarEngine, NodeHandle, ParseHook, SuggestHook};
use parley_foundation::Type;

pub(crate) enum NodeKind {
    Root,
    Literal {
        name: String,
    },
    Argument {
        name: String,
        ty: Type,
        greedy: bool,
        parser: ParseHook,
        suggester: SuggestHook,
    },
}

impl NodeKind {
    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Root => "",
            Self::Literal { name } | Self::Argument { name, .. } => name,
        }
    }
}

pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<usize>,
    pub(crate) handler: Option<CommandHandler>,
}

/// The reference grammar engine.
///
/// After registration the graph is read-only; dispatch and completion only
/// take `&self` and may run from any thread.
pub struct CommandDispatcher {
    pub(crate) nodes: Vec<Node>,
}

impl CommandDispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                children: Vec::new(),
                handler: None,
            }],
        }
    }

    /// The names of all registered root commands, in registration order.
    #[must_use]
    pub fn command_names(&self) -> Vec<&str> {
        self.nodes[0]
            .children
            .iter()
            .map(|&idx| self.nodes[idx].kind.name())
            .collect()
    }

    /// Total node count, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn handle(index: usize) -> NodeHandle {
        NodeHandle(index as u64)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn parent_index(path: &[NodeHandle]) -> usize {
        path.last().map_or(0, |h| h.0 as usize)
    }

    fn find_child(&self, parent: usize, name: &str, literal: bool) -> Option<usize> {
        self.nodes[parent].children.iter().copied().find(|&idx| {
            let node = &self.nodes[idx];
            match &node.kind {
                NodeKind::Literal { name: n } => literal && n == name,
                NodeKind::Argument { name: n, .. } => !literal && n == name,
                NodeKind::Root => false,
            }
        })
    }

    fn push_child(&mut self, parent: usize, kind: NodeKind) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
            handler: None,
        });
        self.nodes[parent].children.push(index);
        index
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarEngine for CommandDispatcher {
    fn register_literal(&mut self, path: &[NodeHandle], name: &str) -> NodeHandle {
        let parent = Self::parent_index(path);
        let index = self.find_child(parent, name, true).unwrap_or_else(|| {
            self.push_child(
                parent,
                NodeKind::Literal {
                    name: name.to_string(),
                },
            )
        });
        Self::handle(index)
    }

    fn register_argument(
        &mut self,
        path: &[NodeHandle],
        name: &str,
        ty: Type,
        greedy: bool,
        parser: ParseHook,
        suggester: SuggestHook,
    ) -> NodeHandle {
        let parent = Self::parent_index(path);
        // Same-named argument nodes merge; the first registration's hooks
        // stand.
        let index = self.find_child(parent, name, false).unwrap_or_else(|| {
            self.push_child(
                parent,
                NodeKind::Argument {
                    name: name.to_string(),
                    ty,
                    greedy,
                    parser,
                    suggester,
                },
            )
        });
        Self::handle(index)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn attach_executor(&mut self, node: NodeHandle, handler: CommandHandler) {
        // Re-attaching replaces: the most recent registration wins.
        self.nodes[node.0 as usize].handler = Some(handler);
    }
}

impl fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CommandDispatcher({} nodes, {} commands)",
            self.nodes.len(),
            self.nodes[0].children.len()
        )
    }
}
