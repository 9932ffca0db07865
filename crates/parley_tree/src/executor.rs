//! Sender-typed executor sets.

use std::fmt;
use std::sync::Arc;

use parley_foundation::{CommandSender, Error, Result, SenderKind, Value};

/// The callback shape executors are built from: sender plus the resolved
/// argument values, in positional order.
pub type ExecutorFn = Arc<dyn Fn(&CommandSender, &[Value]) -> Result<()> + Send + Sync>;

#[derive(Clone)]
struct TypedExecutor {
    /// Constrains this entry to one sender kind; `None` accepts any.
    kind: Option<SenderKind>,
    run: ExecutorFn,
}

/// An ordered set of executor entries, possibly constrained by sender kind.
///
/// "No entries" is a distinct state from "an entry that does nothing":
/// only nodes whose executor has at least one entry produce executions at
/// compile time.
#[derive(Clone, Default)]
pub struct Executor {
    entries: Vec<TypedExecutor>,
}

impl Executor {
    /// Creates an executor with no entries.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// True if no entry has been attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any entry has been attached.
    #[must_use]
    pub fn has_any(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Attaches an entry accepting any sender kind.
    pub fn add<F>(&mut self, f: F)
    where
        F: Fn(&CommandSender, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        self.entries.push(TypedExecutor {
            kind: None,
            run: Arc::new(f),
        });
    }

    /// Attaches an entry constrained to one sender kind.
    pub fn add_for<F>(&mut self, kind: SenderKind, f: F)
    where
        F: Fn(&CommandSender, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        self.entries.push(TypedExecutor {
            kind: Some(kind),
            run: Arc::new(f),
        });
    }

    /// Runs the entry matching the sender.
    ///
    /// An entry constrained to the sender's kind wins over a generic one;
    /// entries are consulted in attachment order. `missing_message` is the
    /// caller-configured text reported when no entry fits.
    ///
    /// # Errors
    ///
    /// Returns a missing-executor error when no entry matches, or whatever
    /// the chosen entry fails with.
    pub fn invoke(
        &self,
        sender: &CommandSender,
        args: &[Value],
        missing_message: &str,
    ) -> Result<()> {
        let exact = self
            .entries
            .iter()
            .find(|entry| entry.kind == Some(sender.kind()));
        let chosen = exact.or_else(|| self.entries.iter().find(|entry| entry.kind.is_none()));

        match chosen {
            Some(entry) => (entry.run)(sender, args),
            None => Err(Error::missing_executor(missing_message)),
        }
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Executor({} entries)", self.entries.len())
    }
}
