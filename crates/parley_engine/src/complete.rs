//! Completion resolution.
//!
//! Walks the dispatch graph over the tokens already complete, then gathers
//! candidates for the partial token from every viable child of every node
//! still standing. Candidate sets are prefix-filtered against the partial
//! token and de-duplicated preserving order; the response carries the byte
//! offset the candidates replace.

use std::collections::HashSet;

use parley_argument::{ParseContext, SuggestionInfo, Suggestion};
use parley_foundation::{CommandSender, Value};

use crate::graph::{CommandDispatcher, NodeKind};
use crate::tokenizer::Tokenizer;

/// A completion response: candidates plus the offset they replace.
#[derive(Debug)]
pub struct Completions {
    /// Byte offset in the raw input where each candidate starts replacing.
    pub start: usize,
    /// Ordered candidates.
    pub suggestions: Vec<Suggestion>,
}

impl Completions {
    fn empty(start: usize) -> Self {
        Self {
            start,
            suggestions: Vec::new(),
        }
    }

    /// The candidate texts, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One graph position still viable after consuming the complete tokens.
struct ReachedNode {
    node: usize,
    /// Values resolved for the argument positions consumed so far,
    /// literals included.
    previous: Vec<Value>,
}

impl CommandDispatcher {
    /// Computes completion candidates for a partially-typed input.
    ///
    /// Suggestion providers that fail are treated as having no candidates;
    /// completion never surfaces an error.
    #[must_use]
    pub fn complete(&self, sender: &CommandSender, input: &str) -> Completions {
        let (complete, partial) = Tokenizer::split_for_completion(input);

        // Completing the command name itself.
        let Some((first, rest)) = complete.split_first() else {
            let mut out = Completions::empty(partial.start);
            for name in self.command_names() {
                out.suggestions.push(Suggestion::new(name));
            }
            finish(&mut out, &partial.text);
            return out;
        };

        let Some(command) = self.nodes[0].children.iter().copied().find(|&idx| {
            matches!(&self.nodes[idx].kind, NodeKind::Literal { name } if *name == first.text)
        }) else {
            return Completions::empty(partial.start);
        };

        let mut reached = vec![ReachedNode {
            node: command,
            previous: Vec::new(),
        }];
        // Greedy nodes met along the way capture the rest of the line;
        // they stay completion targets no matter how many tokens follow.
        let mut greedy_targets: Vec<(usize, Vec<Value>, usize)> = Vec::new();

        for token in rest {
            let mut advanced = Vec::new();
            for place in &reached {
                for &child in &self.nodes[place.node].children {
                    match &self.nodes[child].kind {
                        NodeKind::Root => {}
                        NodeKind::Literal { name } => {
                            if *name == token.text {
                                let mut previous = place.previous.clone();
                                previous.push(Value::string(name));
                                advanced.push(ReachedNode {
                                    node: child,
                                    previous,
                                });
                            }
                        }
                        NodeKind::Argument { greedy, parser, .. } => {
                            if *greedy {
                                greedy_targets.push((
                                    child,
                                    place.previous.clone(),
                                    token.start,
                                ));
                                continue;
                            }
                            let ctx =
                                ParseContext::new(sender, input, token.start, &place.previous);
                            if let Ok(value) = parser(&ctx, &token.text) {
                                let mut previous = place.previous.clone();
                                previous.push(value);
                                advanced.push(ReachedNode {
                                    node: child,
                                    previous,
                                });
                            }
                        }
                    }
                }
            }
            reached = advanced;
            if reached.is_empty() && greedy_targets.is_empty() {
                return Completions::empty(partial.start);
            }
        }

        let mut out = Completions::empty(partial.start);

        for place in &reached {
            for &child in &self.nodes[place.node].children {
                match &self.nodes[child].kind {
                    NodeKind::Root => {}
                    NodeKind::Literal { name } => {
                        out.suggestions.push(Suggestion::new(name.clone()));
                    }
                    NodeKind::Argument { suggester, .. } => {
                        let info = SuggestionInfo::new(
                            sender,
                            input,
                            &place.previous,
                            &partial.text,
                        );
                        if let Ok(suggestions) = suggester(&info) {
                            out.suggestions.extend(suggestions.resolve());
                        }
                    }
                }
            }
        }

        for (node, previous, tail_start) in &greedy_targets {
            let NodeKind::Argument { suggester, .. } = &self.nodes[*node].kind else {
                continue;
            };
            // The greedy argument sees everything typed since its start.
            let tail = &input[*tail_start..];
            let info = SuggestionInfo::new(sender, input, previous, tail);
            if let Ok(suggestions) = suggester(&info) {
                out.suggestions.extend(suggestions.resolve());
            }
        }

        finish(&mut out, &partial.text);
        out
    }
}

/// Prefix-filters against the partial token and de-duplicates preserving
/// first occurrence.
fn finish(out: &mut Completions, partial: &str) {
    let mut seen = HashSet::new();
    out.suggestions.retain(|suggestion| {
        suggestion.text.starts_with(partial) && seen.insert(suggestion.text.clone())
    });
}
