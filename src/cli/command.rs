//! The lint command.
//!
//! Resolves the files to check, builds the GitLab client and runs the
//! lint pipeline, writing results to the given output.

use std::io::Write;

use crate::config::Settings;
use crate::discovery::collect_files;
use crate::error::Result;
use crate::lint::{create_sink, GitLabClient, LintBackend, Linter};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The lint command implementation.
pub struct LintCommand {
    settings: Settings,
    backend: Option<Box<dyn LintBackend>>,
}

impl LintCommand {
    /// Create a lint command talking to the configured GitLab instance.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            backend: None,
        }
    }

    /// Use `backend` instead of a client built from the settings.
    pub fn with_backend(mut self, backend: Box<dyn LintBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Run the command.
    ///
    /// Argument errors are reported before any network activity. Fatal
    /// errors are returned; an `invalid` file yields a failure result.
    pub fn execute(self, out: &mut dyn Write) -> Result<CommandResult> {
        let files = collect_files(&self.settings.paths, self.settings.find_all)?;

        let backend: Box<dyn LintBackend> = match self.backend {
            Some(backend) => backend,
            None => Box::new(GitLabClient::from_settings(&self.settings)?),
        };
        let linter = Linter::new(backend, self.settings.lint_options());

        let mut sink = create_sink(self.settings.format, out, self.settings.use_color);
        let result = linter.run(&files, sink.as_mut())?;

        if result.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(result.exit_code()))
        }
    }
}
