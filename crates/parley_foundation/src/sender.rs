//! Command sender identity.
//!
//! The host front end decides who is issuing a command; the core only needs
//! a name and a kind so executors can be constrained by sender type.

use std::fmt;

/// The kind of origin a command came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SenderKind {
    /// The server console.
    Console,
    /// A connected player.
    Player,
    /// A scripted block or automation source.
    Block,
}

impl fmt::Display for SenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Player => write!(f, "player"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// The origin of a command invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSender {
    name: String,
    kind: SenderKind,
}

impl CommandSender {
    /// Creates a sender with the given name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SenderKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates the console sender.
    #[must_use]
    pub fn console() -> Self {
        Self::new("console", SenderKind::Console)
    }

    /// Creates a player sender with the given name.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self::new(name, SenderKind::Player)
    }

    /// Returns the sender's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sender's kind.
    #[must_use]
    pub const fn kind(&self) -> SenderKind {
        self.kind
    }

    /// Returns true if the sender is a player.
    #[must_use]
    pub fn is_player(&self) -> bool {
        self.kind == SenderKind::Player
    }
}
