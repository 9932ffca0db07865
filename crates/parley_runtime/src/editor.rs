//! Line editor abstraction for the console.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the REPL to use rustyline while remaining swappable
//! (and trivially scriptable in tests).

use std::borrow::Cow;
use std::sync::Arc;

use parley_engine::CommandDispatcher;
use parley_foundation::{CommandSender, Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that wires completion to the dispatcher.
#[derive(Helper, Completer, Hinter, Validator)]
struct ParleyHelper {
    #[rustyline(Completer)]
    completer: DispatcherCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ParleyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completer backed by the dispatcher's completion resolution.
struct DispatcherCompleter {
    dispatcher: Arc<CommandDispatcher>,
    sender: CommandSender,
}

impl Completer for DispatcherCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let completions = self.dispatcher.complete(&self.sender, &line[..pos]);
        let pairs = completions
            .suggestions
            .into_iter()
            .map(|suggestion| {
                let display = match &suggestion.tooltip {
                    Some(tooltip) => format!("{} ({tooltip})", suggestion.text),
                    None => suggestion.text.clone(),
                };
                Pair {
                    display,
                    replacement: suggestion.text,
                }
            })
            .collect();
        Ok((completions.start, pairs))
    }
}

/// Rustyline-backed line editor.
pub struct RustylineEditor {
    editor: Editor<ParleyHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates an editor completing against the given dispatcher, as seen
    /// by the given sender.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal editor fails to initialize.
    pub fn new(dispatcher: Arc<CommandDispatcher>, sender: CommandSender) -> Result<Self> {
        let mut editor = Editor::new()
            .map_err(|e| Error::io(format!("failed to initialize line editor: {e}")))?;
        editor.set_helper(Some(ParleyHelper {
            completer: DispatcherCompleter { dispatcher, sender },
            hinter: HistoryHinter::new(),
        }));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(format!("failed to read input: {e}"))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
