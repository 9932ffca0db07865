//! Compiled executions and tree flattening.
//!
//! An execution is one linear root-to-node argument sequence paired with
//! the executor attached at that node. Compilation walks the tree depth
//! first: a node emits its own execution first (if it carries an executor),
//! then each child's executions in declaration order, prepending the node's
//! own argument to each while the recursion unwinds.

use crate::argument_node::Argument;
use crate::executor::Executor;
use crate::node::{ArgumentTree, CommandTree, TreeLink};

/// One compiled execution: an ordered argument sequence and its executor.
///
/// Immutable once produced. The root's own execution has an empty argument
/// sequence, since the root carries no descriptor.
#[derive(Clone, Debug)]
pub struct Execution {
    arguments: Vec<Argument>,
    executor: Executor,
}

impl Execution {
    /// Creates an execution from a sequence and its executor.
    #[must_use]
    pub fn new(arguments: Vec<Argument>, executor: Executor) -> Self {
        Self {
            arguments,
            executor,
        }
    }

    /// The root-to-node argument sequence, in declaration order.
    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// The executor this execution routes to.
    #[must_use]
    pub const fn executor(&self) -> &Executor {
        &self.executor
    }

    /// This execution with `argument` glued onto the front of its
    /// sequence. Used while unwinding compilation: a child's executions
    /// know only their own subtree path until each ancestor prepends
    /// itself.
    #[must_use]
    pub fn prepended_by(mut self, argument: Argument) -> Self {
        self.arguments.insert(0, argument);
        self
    }
}

impl ArgumentTree {
    /// Compiles this subtree into executions.
    ///
    /// A leaf with no executor contributes nothing (a dead branch — legal,
    /// and still traversable for parsing and suggestions). A node with
    /// both an executor and children yields its own shorter execution plus
    /// the independent executions of its descendants.
    #[must_use]
    pub fn executions(&self) -> Vec<Execution> {
        let argument = self.argument();
        let executor = self.executor();
        let mut executions = Vec::new();

        if executor.has_any() {
            executions.push(Execution::new(vec![argument.clone()], executor));
        }
        for child in self.arguments() {
            for execution in child.executions() {
                executions.push(execution.prepended_by(argument.clone()));
            }
        }
        executions
    }
}

impl CommandTree {
    /// Compiles the whole tree into executions.
    ///
    /// The root contributes an execution with an empty argument sequence
    /// when it carries its own executor ("the bare command runs").
    #[must_use]
    pub fn executions(&self) -> Vec<Execution> {
        let mut executions = Vec::new();

        let executor = self.executor();
        if executor.has_any() {
            executions.push(Execution::new(Vec::new(), executor));
        }
        for child in self.arguments() {
            executions.extend(child.executions());
        }
        executions
    }
}
