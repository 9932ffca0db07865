//! Branching suggestion overrides.
//!
//! A [`SuggestionsBranch`] overlays a command path with replacement
//! completions: one optional provider slot per argument position, followed
//! by a branch point whose alternatives are keyed by the value actually
//! resolved for the last slot. Overlays are advisory — any position or
//! alternative without an override falls through to the argument kind's
//! default completions.

use parley_foundation::{CommandSender, Error, ErrorContext, Result, Value};

use crate::suggestions::{ArgumentSuggestions, SuggestionInfo};

/// Result of resolving an overlay at one position.
#[derive(Debug)]
pub enum SuggestionLookup {
    /// An override provider applies at this position.
    Override(ArgumentSuggestions),
    /// No override; use the argument kind's default completions.
    Default,
}

impl SuggestionLookup {
    /// Returns true if this lookup fell through to defaults.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// A positional, value-keyed suggestion override tree.
///
/// `suggestions` holds one slot per covered argument position; a `None`
/// slot is an explicit gap that keeps later positions aligned. `branches`
/// holds the alternatives of the branch point that follows the last slot:
/// alternative `k` pairs with candidate `k` of the last slot's provider,
/// so callers register alternatives in the same order as the candidates
/// they continue. A `None` alternative means "defaults for this candidate
/// while its siblings override" — distinct from an absent alternative only
/// in that it preserves the positional pairing of the ones after it.
#[derive(Clone, Debug, Default)]
pub struct SuggestionsBranch {
    suggestions: Vec<Option<ArgumentSuggestions>>,
    branches: Vec<Option<SuggestionsBranch>>,
}

impl SuggestionsBranch {
    /// Creates an empty overlay (everything falls through to defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an overlay from positional provider slots.
    #[must_use]
    pub fn suggest<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<ArgumentSuggestions>>,
    {
        Self {
            suggestions: slots.into_iter().collect(),
            branches: Vec::new(),
        }
    }

    /// Appends branch-point alternatives after the last slot.
    #[must_use]
    pub fn branch<I>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = Option<SuggestionsBranch>>,
    {
        self.branches.extend(alternatives);
        self
    }

    /// Appends one provider slot.
    #[must_use]
    pub fn then_suggest(mut self, provider: ArgumentSuggestions) -> Self {
        self.suggestions.push(Some(provider));
        self
    }

    /// Appends one explicit fall-through slot.
    #[must_use]
    pub fn then_default(mut self) -> Self {
        self.suggestions.push(None);
        self
    }

    /// Returns true if this overlay has no slots and no alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty() && self.branches.is_empty()
    }

    /// Number of directly-covered positions.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.suggestions.len()
    }

    /// Number of branch-point alternatives.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// The longest chain of positions this overlay can cover, following
    /// the deepest alternative. Used for cardinality validation against
    /// the tree paths the overlay is attached to.
    #[must_use]
    pub fn max_span(&self) -> usize {
        let nested = self
            .branches
            .iter()
            .flatten()
            .map(SuggestionsBranch::max_span)
            .max()
            .unwrap_or(0);
        self.suggestions.len() + nested
    }

    /// Resolves the override applying at the position being typed.
    ///
    /// `info.previous` must hold the values resolved for the overlay's
    /// covered positions so far; the position being typed is
    /// `info.previous.len()`. Positions inside the slot list resolve to
    /// that slot. Positions past it descend through the branch point: the
    /// value resolved for the last slot selects the alternative whose index
    /// matches that value's index among the slot's candidates, and
    /// resolution recurses with the consumed positions stripped. Any
    /// missing piece — no branch point, no matching candidate, a `None`
    /// alternative or slot — falls through to [`SuggestionLookup::Default`].
    ///
    /// # Errors
    ///
    /// Propagates a provider failure while evaluating the selection key's
    /// candidate list.
    pub fn next_suggestion(&self, info: &SuggestionInfo<'_>) -> Result<SuggestionLookup> {
        let position = info.previous.len();

        if position < self.suggestions.len() {
            return Ok(match &self.suggestions[position] {
                Some(provider) => SuggestionLookup::Override(provider.clone()),
                None => SuggestionLookup::Default,
            });
        }

        let Some(alternative) = self.select_alternative(info)? else {
            return Ok(SuggestionLookup::Default);
        };
        match alternative {
            Some(sub) => sub.next_suggestion(&info.from_position(self.suggestions.len())),
            None => Ok(SuggestionLookup::Default),
        }
    }

    /// Picks the branch-point alternative selected by the value resolved
    /// for the last slot. `None` means no alternative applies; the inner
    /// `Option` is the alternative itself, which may be an explicit
    /// no-override placeholder.
    fn select_alternative(&self, info: &SuggestionInfo<'_>) -> Result<Option<&Option<Self>>> {
        if self.suggestions.is_empty() || self.branches.is_empty() {
            return Ok(None);
        }
        let anchor = self.suggestions.len() - 1;
        let Some(provider) = &self.suggestions[anchor] else {
            // A gap slot has no candidate list to key on.
            return Ok(None);
        };
        let key = info.previous[anchor].render();
        let slot_info = SuggestionInfo::new(
            info.sender,
            info.input,
            &info.previous[..anchor],
            "",
        );
        let candidates = provider.candidates(&slot_info)?;
        let Some(index) = candidates.iter().position(|c| c.text == key) else {
            return Ok(None);
        };
        Ok(self.branches.get(index))
    }

    /// Validates fully-resolved tokens against this overlay.
    ///
    /// Used at parse time when the caller configured suggestions as the
    /// exhaustive set of legal values. Each token must appear among its
    /// slot's candidates; gap slots accept anything; tokens past the slot
    /// list are checked by the selected alternative, or accepted if no
    /// alternative applies. Tokens are `(text, byte offset)` pairs so a
    /// rejection can point at the offending token.
    ///
    /// # Errors
    ///
    /// Returns an enforcement rejection, with input and cursor context,
    /// for the first token outside its allowed set.
    pub fn enforce_replacements(
        &self,
        sender: &CommandSender,
        input: &str,
        tokens: &[(String, usize)],
    ) -> Result<()> {
        let checked = tokens.len().min(self.suggestions.len());
        for (position, (text, start)) in tokens.iter().take(checked).enumerate() {
            let Some(provider) = &self.suggestions[position] else {
                continue;
            };
            let previous: Vec<Value> = tokens[..position]
                .iter()
                .map(|(t, _)| Value::string(t))
                .collect();
            let info = SuggestionInfo::new(sender, input, &previous, "");
            let candidates = provider.candidates(&info)?;
            if !candidates.iter().any(|c| c.text == *text) {
                return Err(Error::enforcement(text.clone()).with_context(
                    ErrorContext::new().with_input(input).with_cursor(*start),
                ));
            }
        }

        if tokens.len() > self.suggestions.len() {
            let previous: Vec<Value> = tokens[..self.suggestions.len()]
                .iter()
                .map(|(t, _)| Value::string(t))
                .collect();
            let info = SuggestionInfo::new(sender, input, &previous, "");
            if let Some(Some(sub)) = self.select_alternative(&info)? {
                return sub.enforce_replacements(
                    sender,
                    input,
                    &tokens[self.suggestions.len()..],
                );
            }
        }

        Ok(())
    }
}
