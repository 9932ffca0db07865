//! Read-only registrar configuration.
//!
//! Built once and handed to the registrar; nothing is ever written back.

use std::path::PathBuf;

/// Configuration for a [`crate::CommandRegistrar`].
#[derive(Clone, Debug)]
pub struct RegistrarConfig {
    /// Log each registered execution.
    verbose_output: bool,
    /// Suppress all registrar logging.
    silent_logs: bool,
    /// Message reported when no executor entry fits the sender. The
    /// `{sender}` placeholder expands to the sender kind.
    missing_executor_message: String,
    /// Where to write a JSON dump of the registered dispatch tree.
    dispatcher_file: Option<PathBuf>,
}

impl RegistrarConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables per-execution registration logging.
    #[must_use]
    pub const fn verbose_output(mut self, verbose: bool) -> Self {
        self.verbose_output = verbose;
        self
    }

    /// Silences all registrar logging.
    #[must_use]
    pub const fn silent_logs(mut self, silent: bool) -> Self {
        self.silent_logs = silent;
        self
    }

    /// Sets the missing-executor message. `{sender}` expands to the sender
    /// kind at invocation time.
    #[must_use]
    pub fn missing_executor_message(mut self, message: impl Into<String>) -> Self {
        self.missing_executor_message = message.into();
        self
    }

    /// Sets the dispatcher dump file.
    #[must_use]
    pub fn dispatcher_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.dispatcher_file = Some(path.into());
        self
    }

    /// Whether per-execution registration logging is on.
    #[must_use]
    pub const fn has_verbose_output(&self) -> bool {
        self.verbose_output
    }

    /// Whether all registrar logging is suppressed.
    #[must_use]
    pub const fn has_silent_logs(&self) -> bool {
        self.silent_logs
    }

    /// The configured missing-executor message.
    #[must_use]
    pub fn get_missing_executor_message(&self) -> &str {
        &self.missing_executor_message
    }

    /// The configured dispatcher dump file, if any.
    #[must_use]
    pub fn get_dispatcher_file(&self) -> Option<&PathBuf> {
        self.dispatcher_file.as_ref()
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            verbose_output: false,
            silent_logs: false,
            missing_executor_message: "This command has no implementations for {sender}"
                .to_string(),
            dispatcher_file: None,
        }
    }
}
