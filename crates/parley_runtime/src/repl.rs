//! The interactive read-dispatch loop.

use std::sync::Arc;

use parley_engine::CommandDispatcher;
use parley_foundation::{CommandSender, Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive console.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The dispatcher commands were registered with.
    dispatcher: Arc<CommandDispatcher>,

    /// Who the console acts as.
    sender: CommandSender,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(dispatcher: Arc<CommandDispatcher>, sender: CommandSender) -> Result<Self> {
        let editor = RustylineEditor::new(Arc::clone(&dispatcher), sender.clone())?;
        Ok(Self::with_editor(editor, dispatcher, sender))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, dispatcher: Arc<CommandDispatcher>, sender: CommandSender) -> Self {
        Self {
            editor,
            dispatcher,
            sender,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs the console loop until EOF or an `exit`/`quit` line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally; command failures
    /// are reported to the terminal and do not end the loop.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input == "exit" || input == "quit" {
                break;
            }

            self.editor.add_history(input);
            if let Err(e) = self.dispatcher.dispatch(&self.sender, input) {
                print_error(&e);
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    fn print_banner(&self) {
        println!("parley {}", env!("CARGO_PKG_VERSION"));
        println!("commands: {}", self.dispatcher.command_names().join(", "));
        println!("tab completes; exit quits\n");
    }
}

/// Prints a dispatch failure, with a caret under the offending token when
/// the error carries input context.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
    if let Some(context) = &error.context {
        if let (Some(input), Some(cursor)) = (&context.input, context.cursor) {
            eprintln!("  {input}");
            eprintln!("  {}\x1b[31m^\x1b[0m", " ".repeat(cursor.min(input.len())));
        }
    }
}
