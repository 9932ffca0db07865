//! Suggestion candidates and providers.
//!
//! Providers are caller-supplied closures producing candidates lazily from
//! the request context. A provider may complete immediately or hand back a
//! deferred future; the core never awaits it — resolution is owned by the
//! front end servicing the completion request.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use parley_foundation::{CommandSender, Result, Value};

/// One completion candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// The replacement text.
    pub text: String,
    /// Optional tooltip shown alongside the candidate.
    pub tooltip: Option<String>,
}

impl Suggestion {
    /// Creates a candidate with no tooltip.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip: None,
        }
    }

    /// Creates a candidate with a tooltip.
    #[must_use]
    pub fn with_tooltip(text: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip: Some(tooltip.into()),
        }
    }
}

/// A suggestion request.
///
/// `previous` holds a value for every preceding argument position of the
/// matched path, literals included (as strings), so branch overlays can key
/// on any position. `current` is the partial token being typed.
#[derive(Debug)]
pub struct SuggestionInfo<'a> {
    /// Who asked for completions.
    pub sender: &'a CommandSender,
    /// The full raw input line.
    pub input: &'a str,
    /// Values resolved for every preceding argument position.
    pub previous: &'a [Value],
    /// The raw partial token being typed.
    pub current: &'a str,
}

impl<'a> SuggestionInfo<'a> {
    /// Creates a suggestion request.
    #[must_use]
    pub const fn new(
        sender: &'a CommandSender,
        input: &'a str,
        previous: &'a [Value],
        current: &'a str,
    ) -> Self {
        Self {
            sender,
            input,
            previous,
            current,
        }
    }

    /// A copy of this request with `previous` narrowed to the positions at
    /// and after `start`.
    #[must_use]
    pub fn from_position(&self, start: usize) -> SuggestionInfo<'a> {
        SuggestionInfo {
            sender: self.sender,
            input: self.input,
            previous: self.previous.get(start..).unwrap_or(&[]),
            current: self.current,
        }
    }
}

/// Candidates, either ready now or produced by a deferred computation.
///
/// The deferred variant is returned unresolved to the caller of the
/// resolution API, which owns blocking, cancellation, and timeouts.
pub enum Suggestions {
    /// Candidates available immediately.
    Ready(Vec<Suggestion>),
    /// Candidates produced asynchronously.
    Deferred(BoxFuture<'static, Vec<Suggestion>>),
}

impl Suggestions {
    /// No candidates.
    #[must_use]
    pub const fn none() -> Self {
        Self::Ready(Vec::new())
    }

    /// Immediate candidates.
    #[must_use]
    pub fn ready(candidates: Vec<Suggestion>) -> Self {
        Self::Ready(candidates)
    }

    /// Resolves to a candidate list, blocking on a deferred computation.
    ///
    /// Used where a concrete candidate set is unavoidable: branch-point
    /// selection and replacement enforcement.
    #[must_use]
    pub fn resolve(self) -> Vec<Suggestion> {
        match self {
            Self::Ready(candidates) => candidates,
            Self::Deferred(future) => futures::executor::block_on(future),
        }
    }
}

impl fmt::Debug for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(candidates) => f.debug_tuple("Ready").field(candidates).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

type ProviderFn = dyn Fn(&SuggestionInfo<'_>) -> Result<Suggestions> + Send + Sync;

/// A suggestion provider: raw context in, candidates out.
///
/// Cloning shares the underlying closure.
#[derive(Clone)]
pub struct ArgumentSuggestions {
    provider: Arc<ProviderFn>,
}

impl ArgumentSuggestions {
    /// A provider backed by an arbitrary closure.
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&SuggestionInfo<'_>) -> Result<Suggestions> + Send + Sync + 'static,
    {
        Self {
            provider: Arc::new(f),
        }
    }

    /// A provider with a fixed candidate list.
    #[must_use]
    pub fn strings<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<Suggestion> = candidates
            .into_iter()
            .map(|s| Suggestion::new(s.into()))
            .collect();
        Self::from_fn(move |_| Ok(Suggestions::ready(candidates.clone())))
    }

    /// A provider with fixed candidates carrying tooltips.
    #[must_use]
    pub fn strings_with_tooltips<I, S, T>(candidates: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let candidates: Vec<Suggestion> = candidates
            .into_iter()
            .map(|(s, t)| Suggestion::with_tooltip(s.into(), t.into()))
            .collect();
        Self::from_fn(move |_| Ok(Suggestions::ready(candidates.clone())))
    }

    /// A provider with no candidates.
    ///
    /// Under enforcement this forbids any token at its position; it is not
    /// the same as an absent override, which falls through to defaults.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_fn(|_| Ok(Suggestions::none()))
    }

    /// Produces candidates for a request, possibly deferred.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying provider closure.
    pub fn suggest(&self, info: &SuggestionInfo<'_>) -> Result<Suggestions> {
        (self.provider)(info)
    }

    /// Produces a concrete candidate list, blocking on deferred providers.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying provider closure.
    pub fn candidates(&self, info: &SuggestionInfo<'_>) -> Result<Vec<Suggestion>> {
        Ok(self.suggest(info)?.resolve())
    }
}

impl fmt::Debug for ArgumentSuggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArgumentSuggestions(..)")
    }
}
