//! One argument descriptor plus its suggestion overlay.

use std::fmt;
use std::sync::Arc;

use parley_argument::kinds::LiteralKind;
use parley_argument::{ArgumentKind, ArgumentSuggestions, SuggestionsBranch};
use parley_foundation::Type;

/// A named argument descriptor with its suggestion overlay.
///
/// This is the payload of one tree node. Cloning is cheap and shares the
/// underlying kind, so executions compiled from the same tree carry
/// value-identical descriptors.
#[derive(Clone)]
pub struct Argument {
    name: Arc<str>,
    kind: Arc<dyn ArgumentKind>,
    replacements: SuggestionsBranch,
    enforce: bool,
}

impl Argument {
    /// Creates a literal argument. The node name and the matched word are
    /// the same string.
    #[must_use]
    pub fn literal(word: impl AsRef<str>) -> Self {
        let word = word.as_ref();
        Self {
            name: Arc::from(word),
            kind: Arc::new(LiteralKind::new(word)),
            replacements: SuggestionsBranch::new(),
            enforce: false,
        }
    }

    /// Creates a typed argument with the given node name.
    #[must_use]
    pub fn typed(name: impl AsRef<str>, kind: impl ArgumentKind + 'static) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            kind: Arc::new(kind),
            replacements: SuggestionsBranch::new(),
            enforce: false,
        }
    }

    /// The node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying argument kind.
    #[must_use]
    pub fn kind(&self) -> &Arc<dyn ArgumentKind> {
        &self.kind
    }

    /// The suggestion overlay attached to this argument.
    #[must_use]
    pub const fn replacements(&self) -> &SuggestionsBranch {
        &self.replacements
    }

    /// Replaces the whole suggestion overlay.
    #[must_use]
    pub fn with_replacements(mut self, replacements: SuggestionsBranch) -> Self {
        self.replacements = replacements;
        self
    }

    /// Replaces this argument's completions with a single provider.
    #[must_use]
    pub fn replace_suggestions(self, provider: ArgumentSuggestions) -> Self {
        self.with_replacements(SuggestionsBranch::suggest([Some(provider)]))
    }

    /// Replaces completions with an ordered sequence of positional slots.
    ///
    /// Meaningful beyond the first slot only for greedy arguments (whose
    /// internal tokens form the later positions) or when descendant
    /// argument positions should be covered by this overlay.
    #[must_use]
    pub fn replace_suggestions_seq<I>(self, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<ArgumentSuggestions>>,
    {
        self.with_replacements(SuggestionsBranch::suggest(slots))
    }

    /// Appends branch-point alternatives to the overlay.
    #[must_use]
    pub fn branch_suggestions<I>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = Option<SuggestionsBranch>>,
    {
        self.replacements = self.replacements.branch(alternatives);
        self
    }

    /// Marks the overlay as the exhaustive set of legal values rather than
    /// hints: at parse time the resolved input must match it or the
    /// command is rejected.
    #[must_use]
    pub const fn enforce_replacements(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }

    /// Whether the overlay is enforced at parse time.
    #[must_use]
    pub const fn is_enforced(&self) -> bool {
        self.enforce
    }

    /// The primitive type tag of the underlying kind.
    #[must_use]
    pub fn primitive_type(&self) -> Type {
        self.kind.primitive_type()
    }

    /// True for literal nodes.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    /// True for kinds that consume the rest of the input.
    #[must_use]
    pub fn is_greedy(&self) -> bool {
        self.kind.is_greedy()
    }

    /// True if this argument contributes a value to executors.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        self.kind.is_listed()
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("type", &self.primitive_type())
            .field("literal", &self.is_literal())
            .finish_non_exhaustive()
    }
}
