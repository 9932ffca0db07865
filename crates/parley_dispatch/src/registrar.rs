//! Validation, compilation, and submission of command trees.

use std::sync::Arc;

use parley_argument::{ParseContext, SuggestionInfo, SuggestionLookup, SuggestionsBranch};
use parley_foundation::{Error, Result, Value};
use parley_tree::{Argument, ArgumentTree, CommandTree, Execution, TreeLink};
use tracing::{debug, info};

use crate::config::RegistrarConfig;
use crate::dump;
use crate::engine::{
    CommandHandler, GrammarEngine, Invocation, NodeHandle, ParseHook, SuggestHook,
};

/// One registered command, retained after submission.
///
/// The execution list is the immutable post-compilation artifact; nothing
/// mutates it once registration returns.
#[derive(Debug)]
pub struct RegisteredCommand {
    name: String,
    aliases: Vec<String>,
    executions: Vec<Execution>,
}

impl RegisteredCommand {
    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command's aliases.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The compiled executions, in compilation order.
    #[must_use]
    pub fn executions(&self) -> &[Execution] {
        &self.executions
    }
}

/// Compiles command trees and submits their executions to a grammar
/// engine.
///
/// The registrar is the only component that talks to the engine: it
/// drives node registration at `register` time and packages the runtime
/// parse, suggestion, and executor callbacks the engine later invokes.
pub struct CommandRegistrar<E: GrammarEngine> {
    engine: E,
    config: RegistrarConfig,
    commands: Vec<RegisteredCommand>,
}

impl<E: GrammarEngine> CommandRegistrar<E> {
    /// Creates a registrar with the default configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, RegistrarConfig::default())
    }

    /// Creates a registrar with the given configuration.
    pub fn with_config(engine: E, config: RegistrarConfig) -> Self {
        Self {
            engine,
            config,
            commands: Vec::new(),
        }
    }

    /// The registrar configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// The wrapped engine.
    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Consumes the registrar, returning the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// The commands registered so far.
    #[must_use]
    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    /// Compiles `tree` and registers every execution with the engine.
    ///
    /// Fails fast on configuration mistakes: empty or whitespace-bearing
    /// names, duplicate command names, a tree with no executor anywhere,
    /// or a suggestion overlay spanning more positions than any path
    /// through its node offers.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for any of the above; an I/O error if
    /// the dispatcher dump cannot be written.
    pub fn register(&mut self, tree: &CommandTree) -> Result<()> {
        let name = tree.name();
        let aliases = tree.aliases();
        self.validate(tree, &name, &aliases)?;

        let executions = tree.executions();
        if executions.is_empty() {
            return Err(Error::configuration(format!(
                "command {name:?} has no executor anywhere in its tree"
            )));
        }

        let mut labels = vec![name.clone()];
        labels.extend(aliases.iter().cloned());
        for label in &labels {
            for execution in &executions {
                self.submit(label, execution);
            }
        }

        if !self.config.has_silent_logs() {
            if self.config.has_verbose_output() {
                for execution in &executions {
                    debug!(
                        command = %name,
                        signature = %execution_signature(&name, execution),
                        "registered execution"
                    );
                }
            }
            info!(command = %name, executions = executions.len(), "registered command");
        }

        self.commands.push(RegisteredCommand {
            name,
            aliases,
            executions,
        });

        if let Some(path) = self.config.get_dispatcher_file() {
            dump::write_dump(path, &self.commands)?;
        }
        Ok(())
    }

    fn validate(&self, tree: &CommandTree, name: &str, aliases: &[String]) -> Result<()> {
        for label in std::iter::once(name).chain(aliases.iter().map(String::as_str)) {
            if label.is_empty() {
                return Err(Error::configuration("command name must not be empty"));
            }
            if label.contains(char::is_whitespace) {
                return Err(Error::configuration(format!(
                    "command name {label:?} must not contain whitespace"
                )));
            }
            if self
                .commands
                .iter()
                .any(|c| c.name == label || c.aliases.iter().any(|a| a == label))
            {
                return Err(Error::configuration(format!(
                    "command {label:?} is already registered"
                )));
            }
        }
        for child in tree.arguments() {
            Self::validate_node(&child)?;
        }
        Ok(())
    }

    fn validate_node(node: &ArgumentTree) -> Result<()> {
        let argument = node.argument();
        if argument.name().is_empty() {
            return Err(Error::configuration("argument name must not be empty"));
        }

        let overlay = argument.replacements();
        if !overlay.is_empty() && !argument.is_greedy() {
            let available = Self::subtree_depth(node);
            if overlay.max_span() > available {
                return Err(Error::configuration(format!(
                    "suggestion overlay on {:?} covers {} positions but at most {} remain",
                    argument.name(),
                    overlay.max_span(),
                    available
                )));
            }
        }

        for child in node.arguments() {
            Self::validate_node(&child)?;
        }
        Ok(())
    }

    /// Positions available from `node` down its deepest path, `node`
    /// included.
    fn subtree_depth(node: &ArgumentTree) -> usize {
        1 + node
            .arguments()
            .iter()
            .map(Self::subtree_depth)
            .max()
            .unwrap_or(0)
    }

    fn submit(&mut self, label: &str, execution: &Execution) {
        let mut path: Vec<NodeHandle> = Vec::new();
        path.push(self.engine.register_literal(&[], label));

        // The nearest enclosing overlay, carried forward so descendant
        // positions resolve against it.
        let mut overlay: Option<(SuggestionsBranch, usize)> = None;

        for (position, argument) in execution.arguments().iter().enumerate() {
            if !argument.replacements().is_empty() {
                overlay = Some((argument.replacements().clone(), position));
            }
            let handle = if argument.is_literal() {
                self.engine.register_literal(&path, argument.name())
            } else {
                self.engine.register_argument(
                    &path,
                    argument.name(),
                    argument.primitive_type(),
                    argument.is_greedy(),
                    make_parse_hook(argument.clone()),
                    make_suggest_hook(argument.clone(), overlay.clone()),
                )
            };
            path.push(handle);
        }

        let handler = make_handler(
            execution,
            self.config.get_missing_executor_message().to_string(),
        );
        self.engine.attach_executor(path[path.len() - 1], handler);
    }
}

/// Human-readable execution signature, for registration logging.
fn execution_signature(name: &str, execution: &Execution) -> String {
    let mut signature = format!("/{name}");
    for argument in execution.arguments() {
        if argument.is_literal() {
            signature.push_str(&format!(" {}", argument.name()));
        } else {
            signature.push_str(&format!(" <{}>", argument.name()));
        }
    }
    signature
}

fn make_parse_hook(argument: Argument) -> ParseHook {
    Arc::new(move |ctx: &ParseContext<'_>, raw: &str| {
        let value = argument.kind().parse(raw, ctx)?;
        // Greedy kinds carry their own token positions; their overlay is
        // enforced over the tail they just consumed.
        if argument.is_greedy() && argument.is_enforced() && !argument.replacements().is_empty() {
            let tokens = split_tokens(raw, ctx.cursor);
            argument
                .replacements()
                .enforce_replacements(ctx.sender, ctx.input, &tokens)?;
        }
        Ok(value)
    })
}

fn make_suggest_hook(
    argument: Argument,
    overlay: Option<(SuggestionsBranch, usize)>,
) -> SuggestHook {
    if argument.is_greedy() && !argument.replacements().is_empty() {
        let branch = argument.replacements().clone();
        return Arc::new(move |info: &SuggestionInfo<'_>| {
            // Inside a greedy argument the completed words of the tail are
            // the previous positions and the trailing word is current.
            let (words, partial) = split_tail(info.current);
            let previous: Vec<Value> = words.into_iter().map(Value::from).collect();
            let rel = SuggestionInfo::new(info.sender, info.input, &previous, &partial);
            match branch.next_suggestion(&rel)? {
                SuggestionLookup::Override(provider) => provider.suggest(&rel),
                SuggestionLookup::Default => Ok(argument.kind().default_suggestions(&rel)),
            }
        });
    }

    match overlay {
        Some((branch, anchor)) => Arc::new(move |info: &SuggestionInfo<'_>| {
            let rel = info.from_position(anchor);
            match branch.next_suggestion(&rel)? {
                SuggestionLookup::Override(provider) => provider.suggest(&rel),
                SuggestionLookup::Default => Ok(argument.kind().default_suggestions(info)),
            }
        }),
        None => Arc::new(move |info: &SuggestionInfo<'_>| {
            Ok(argument.kind().default_suggestions(info))
        }),
    }
}

fn make_handler(execution: &Execution, missing_template: String) -> CommandHandler {
    // Enforced overlays anchored at non-greedy positions span the
    // argument positions that follow; they are checked once the command
    // has fully parsed, before the executor runs.
    let enforced: Vec<(usize, SuggestionsBranch)> = execution
        .arguments()
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.is_greedy() && a.is_enforced() && !a.replacements().is_empty())
        .map(|(i, a)| (i, a.replacements().clone()))
        .collect();
    let executor = execution.executor().clone();

    Arc::new(move |invocation: &Invocation<'_>| {
        for (anchor, branch) in &enforced {
            let tokens = invocation.tokens.get(*anchor..).unwrap_or(&[]);
            branch.enforce_replacements(invocation.sender, invocation.input, tokens)?;
        }
        let message =
            missing_template.replace("{sender}", &invocation.sender.kind().to_string());
        executor.invoke(invocation.sender, invocation.args, &message)
    })
}

/// Splits whitespace-separated tokens, keeping absolute byte offsets.
fn split_tokens(text: &str, base: usize) -> Vec<(String, usize)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((text[s..i].to_string(), base + s));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((text[s..].to_string(), base + s));
    }
    tokens
}

/// Splits a greedy tail into completed words and the trailing partial
/// word. A tail ending in whitespace has an empty partial.
fn split_tail(tail: &str) -> (Vec<String>, String) {
    let mut words: Vec<String> = tail.split_whitespace().map(String::from).collect();
    if tail.ends_with(char::is_whitespace) || tail.is_empty() {
        (words, String::new())
    } else {
        let partial = words.pop().unwrap_or_default();
        (words, partial)
    }
}
