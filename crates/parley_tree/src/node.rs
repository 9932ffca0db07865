//! Builder nodes and the parent/child linking contract.
//!
//! Nodes are cheap handles over shared interiors: cloning a node clones the
//! handle, not the subtree. The parent's child list owns its children
//! strongly; a child's parent pointer is a non-owning back-reference, so no
//! reference cycle forms.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use parley_argument::ArgumentKind;
use parley_foundation::{CommandSender, Result, SenderKind, Value};

use crate::argument_node::Argument;
use crate::executor::Executor;

/// Creates a literal tree node.
#[must_use]
pub fn literal(word: impl AsRef<str>) -> ArgumentTree {
    ArgumentTree::new(Argument::literal(word))
}

/// Creates a typed tree node.
#[must_use]
pub fn argument(name: impl AsRef<str>, kind: impl ArgumentKind + 'static) -> ArgumentTree {
    ArgumentTree::new(Argument::typed(name, kind))
}

struct NodeInner {
    argument: Argument,
    children: Vec<ArgumentTree>,
    executor: Executor,
    parent: ParentLink,
}

struct RootInner {
    name: String,
    aliases: Vec<String>,
    children: Vec<ArgumentTree>,
    executor: Executor,
}

/// Non-owning back-reference to whichever node adopted this one.
enum ParentLink {
    None,
    Command(Weak<RefCell<RootInner>>),
    Argument(Weak<RefCell<NodeInner>>),
}

/// An upgraded parent handle.
pub enum Parent {
    /// The parent is a command root.
    Command(CommandTree),
    /// The parent is an interior argument node.
    Argument(ArgumentTree),
}

/// The parent/child relationship contract shared by roots and interior
/// nodes.
pub trait TreeLink: Sized {
    /// Appends `child` to this node's children and makes this node the
    /// child's parent. Returns `self` for chaining. No duplicate or
    /// type-conflict validation happens here; ambiguity resolution belongs
    /// to the grammar engine.
    #[must_use]
    fn then(self, child: ArgumentTree) -> Self;

    /// The ordered children of this node. The returned handles are live:
    /// mutating through them mutates the tree. External callers treat this
    /// as read-only.
    fn arguments(&self) -> Vec<ArgumentTree>;

    /// The node that adopted this one, if any. Roots always answer `None`.
    fn parent(&self) -> Option<Parent>;

    /// Installs a parent back-reference. Called by [`TreeLink::then`]; not
    /// intended for external use. Roots ignore this call — the "roots have
    /// no parent" invariant is enforced here at the contract boundary.
    fn set_parent(&self, parent: Option<&Parent>);
}

/// An interior tree node: one argument, ordered children, an optional
/// executor, and a parent back-reference.
#[derive(Clone)]
pub struct ArgumentTree {
    inner: Rc<RefCell<NodeInner>>,
}

impl ArgumentTree {
    /// Creates a node for the given argument.
    #[must_use]
    pub fn new(argument: Argument) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeInner {
                argument,
                children: Vec::new(),
                executor: Executor::none(),
                parent: ParentLink::None,
            })),
        }
    }

    /// A copy of this node's argument. Clones share the descriptor.
    #[must_use]
    pub fn argument(&self) -> Argument {
        self.inner.borrow().argument.clone()
    }

    /// A copy of this node's executor set.
    #[must_use]
    pub fn executor(&self) -> Executor {
        self.inner.borrow().executor.clone()
    }

    /// Attaches an executor entry accepting any sender.
    #[must_use]
    pub fn executes<F>(self, f: F) -> Self
    where
        F: Fn(&CommandSender, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        self.inner.borrow_mut().executor.add(f);
        self
    }

    /// Attaches an executor entry constrained to one sender kind.
    #[must_use]
    pub fn executes_for<F>(self, kind: SenderKind, f: F) -> Self
    where
        F: Fn(&CommandSender, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        self.inner.borrow_mut().executor.add_for(kind, f);
        self
    }

    /// True if both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Replaces this node's completions with a single provider.
    /// See [`Argument::replace_suggestions`].
    #[must_use]
    pub fn replace_suggestions(self, provider: parley_argument::ArgumentSuggestions) -> Self {
        self.update_argument(|argument| argument.replace_suggestions(provider))
    }

    /// Replaces completions with positional slots.
    /// See [`Argument::replace_suggestions_seq`].
    #[must_use]
    pub fn replace_suggestions_seq<I>(self, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<parley_argument::ArgumentSuggestions>>,
    {
        self.update_argument(|argument| argument.replace_suggestions_seq(slots))
    }

    /// Appends branch-point alternatives to this node's overlay.
    /// See [`Argument::branch_suggestions`].
    #[must_use]
    pub fn branch_suggestions<I>(self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = Option<parley_argument::SuggestionsBranch>>,
    {
        self.update_argument(|argument| argument.branch_suggestions(alternatives))
    }

    /// Replaces the whole overlay. See [`Argument::with_replacements`].
    #[must_use]
    pub fn with_replacements(self, replacements: parley_argument::SuggestionsBranch) -> Self {
        self.update_argument(|argument| argument.with_replacements(replacements))
    }

    /// Marks the overlay as enforced. See [`Argument::enforce_replacements`].
    #[must_use]
    pub fn enforce_replacements(self, enforce: bool) -> Self {
        self.update_argument(|argument| argument.enforce_replacements(enforce))
    }

    fn update_argument(self, f: impl FnOnce(Argument) -> Argument) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            let argument = inner.argument.clone();
            inner.argument = f(argument);
        }
        self
    }
}

impl TreeLink for ArgumentTree {
    fn then(self, child: ArgumentTree) -> Self {
        child.set_parent(Some(&Parent::Argument(self.clone())));
        self.inner.borrow_mut().children.push(child);
        self
    }

    fn arguments(&self) -> Vec<ArgumentTree> {
        self.inner.borrow().children.clone()
    }

    fn parent(&self) -> Option<Parent> {
        match &self.inner.borrow().parent {
            ParentLink::None => None,
            ParentLink::Command(weak) => weak
                .upgrade()
                .map(|inner| Parent::Command(CommandTree { inner })),
            ParentLink::Argument(weak) => weak
                .upgrade()
                .map(|inner| Parent::Argument(ArgumentTree { inner })),
        }
    }

    fn set_parent(&self, parent: Option<&Parent>) {
        // Re-attaching silently replaces the previous back-reference: a
        // node has at most one parent at a time.
        self.inner.borrow_mut().parent = match parent {
            None => ParentLink::None,
            Some(Parent::Command(root)) => {
                ParentLink::Command(Rc::downgrade(&root.inner))
            }
            Some(Parent::Argument(node)) => {
                ParentLink::Argument(Rc::downgrade(&node.inner))
            }
        };
    }
}

impl fmt::Debug for ArgumentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ArgumentTree")
            .field("argument", &inner.argument)
            .field("children", &inner.children.len())
            .field("executable", &inner.executor.has_any())
            .finish()
    }
}

/// The parent-less root of a command tree: the command name, aliases,
/// ordered children, and an optional root executor.
#[derive(Clone)]
pub struct CommandTree {
    inner: Rc<RefCell<RootInner>>,
}

impl CommandTree {
    /// Creates a root node for a command with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RootInner {
                name: name.into(),
                aliases: Vec::new(),
                children: Vec::new(),
                executor: Executor::none(),
            })),
        }
    }

    /// Adds an alias the command also registers under.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        self.inner.borrow_mut().aliases.push(alias.into());
        self
    }

    /// The command name.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// The command's aliases, in declaration order.
    #[must_use]
    pub fn aliases(&self) -> Vec<String> {
        self.inner.borrow().aliases.clone()
    }

    /// A copy of the root executor set.
    #[must_use]
    pub fn executor(&self) -> Executor {
        self.inner.borrow().executor.clone()
    }

    /// Attaches a root executor entry accepting any sender.
    #[must_use]
    pub fn executes<F>(self, f: F) -> Self
    where
        F: Fn(&CommandSender, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        self.inner.borrow_mut().executor.add(f);
        self
    }

    /// Attaches a root executor entry constrained to one sender kind.
    #[must_use]
    pub fn executes_for<F>(self, kind: SenderKind, f: F) -> Self
    where
        F: Fn(&CommandSender, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        self.inner.borrow_mut().executor.add_for(kind, f);
        self
    }

    /// True if both handles point at the same root.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl TreeLink for CommandTree {
    fn then(self, child: ArgumentTree) -> Self {
        child.set_parent(Some(&Parent::Command(self.clone())));
        self.inner.borrow_mut().children.push(child);
        self
    }

    fn arguments(&self) -> Vec<ArgumentTree> {
        self.inner.borrow().children.clone()
    }

    fn parent(&self) -> Option<Parent> {
        // A command root cannot have a parent.
        None
    }

    fn set_parent(&self, _parent: Option<&Parent>) {
        // A command root cannot have a parent.
    }
}

impl fmt::Debug for CommandTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("CommandTree")
            .field("name", &inner.name)
            .field("children", &inner.children.len())
            .finish_non_exhaustive()
    }
}
