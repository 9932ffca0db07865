//! Backtracking parse and executor routing.

use parley_argument::ParseContext;
use parley_dispatch::Invocation;
use parley_foundation::{
    CommandSender, Error, ErrorContext, ErrorKind, Result, Value,
};
use tracing::debug;

use crate::graph::{CommandDispatcher, NodeKind};
use crate::tokenizer::{Token, Tokenizer};

impl CommandDispatcher {
    /// Parses `input` against the registered grammar and runs the matched
    /// executor.
    ///
    /// Children are tried in declaration order; a failing branch backtracks
    /// to the next sibling. When every branch fails, the error that made it
    /// deepest into the input is reported.
    ///
    /// # Errors
    ///
    /// Empty input, an unknown command, input stopping short of any
    /// executor-bearing node, a token failing its argument grammar, a
    /// replacement-enforcement rejection, or whatever the executor itself
    /// fails with.
    pub fn dispatch(&self, sender: &CommandSender, input: &str) -> Result<()> {
        let tokens = Tokenizer::tokenize(input);
        let Some(first) = tokens.first() else {
            return Err(Error::new(ErrorKind::EmptyInput));
        };

        let Some(command) = self.root_command(&first.text) else {
            return Err(Error::unknown_command(first.text.clone()).with_context(
                ErrorContext::new().with_input(input).with_cursor(first.start),
            ));
        };

        debug!(command = %first.text, sender = %sender.name(), "dispatching");
        self.walk(command, &tokens, 1, sender, input, &[], &[])
    }

    fn root_command(&self, name: &str) -> Option<usize> {
        self.nodes[0].children.iter().copied().find(|&idx| {
            matches!(&self.nodes[idx].kind, NodeKind::Literal { name: n } if n == name)
        })
    }

    /// Recursive descent over `node`'s children, consuming `tokens[next..]`.
    ///
    /// `args` holds the listed values accumulated so far; `raw` holds the
    /// raw text and offset of every argument position consumed (literals
    /// included, the command name excluded).
    #[allow(clippy::too_many_arguments)]
    fn walk(
        &self,
        node: usize,
        tokens: &[Token],
        next: usize,
        sender: &CommandSender,
        input: &str,
        args: &[Value],
        raw: &[(String, usize)],
    ) -> Result<()> {
        if next >= tokens.len() {
            return match &self.nodes[node].handler {
                Some(handler) => handler(&Invocation {
                    sender,
                    input,
                    args,
                    tokens: raw,
                }),
                None => Err(Error::incomplete_command().with_context(
                    ErrorContext::new().with_input(input).with_cursor(input.len()),
                )),
            };
        }

        let token = &tokens[next];
        let mut best: Option<Error> = None;

        for &child in &self.nodes[node].children {
            let outcome = match &self.nodes[child].kind {
                NodeKind::Root => continue,
                NodeKind::Literal { name } => {
                    if *name != token.text {
                        continue;
                    }
                    let mut raw = raw.to_vec();
                    raw.push((token.text.clone(), token.start));
                    self.walk(child, tokens, next + 1, sender, input, args, &raw)
                }
                NodeKind::Argument {
                    greedy, parser, ..
                } => {
                    let (text, consumed_to) = if *greedy {
                        (&input[token.start..], tokens.len())
                    } else {
                        (token.text.as_str(), next + 1)
                    };
                    let ctx = ParseContext::new(sender, input, token.start, args);
                    match parser(&ctx, text) {
                        Ok(value) => {
                            let mut args = args.to_vec();
                            args.push(value);
                            let mut raw = raw.to_vec();
                            raw.push((text.to_string(), token.start));
                            self.walk(child, tokens, consumed_to, sender, input, &args, &raw)
                        }
                        Err(e) => Err(e),
                    }
                }
            };

            match outcome {
                Ok(()) => return Ok(()),
                Err(e) => keep_deepest(&mut best, e),
            }
        }

        Err(best.unwrap_or_else(|| {
            Error::syntax(format!("unexpected argument {:?}", token.text)).with_context(
                ErrorContext::new().with_input(input).with_cursor(token.start),
            )
        }))
    }
}

/// Keeps whichever error points deepest into the input.
fn keep_deepest(best: &mut Option<Error>, candidate: Error) {
    let further = best
        .as_ref()
        .is_none_or(|b| candidate.cursor().unwrap_or(0) >= b.cursor().unwrap_or(0));
    if further {
        *best = Some(candidate);
    }
}
