//! Resolved run settings.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::lint::{LintOptions, OutputFormat, DEFAULT_FILE_NAME};
use crate::ui::should_use_colors;

/// Everything a lint run needs, resolved once from flags and environment.
#[derive(Clone)]
pub struct Settings {
    /// GitLab host, without scheme.
    pub domain: String,
    /// Personal access token, sent as `private_token`.
    pub token: Option<String>,
    /// Files, or directories when `find_all` is set.
    pub paths: Vec<PathBuf>,
    pub verify_tls: bool,
    pub find_all: bool,
    pub strip_includes: bool,
    pub timeout: Duration,
    pub format: OutputFormat,
    pub use_color: bool,
}

impl Settings {
    /// Resolve settings from parsed arguments.
    ///
    /// Environment fallbacks (`GITLAB_LINT_DOMAIN`, `GITLAB_LINT_TOKEN`,
    /// `GITLAB_LINT_TIMEOUT`) are applied by clap during parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            domain: cli.domain.clone(),
            token: cli.token.clone().filter(|token| !token.is_empty()),
            paths: cli.paths.clone(),
            verify_tls: cli.verify,
            find_all: cli.find_all,
            strip_includes: cli.skip_includes,
            timeout: Duration::from_secs(cli.timeout),
            format: cli.format,
            use_color: !cli.no_color && should_use_colors(),
        }
    }

    /// Options for the lint pipeline.
    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            strip_includes: self.strip_includes,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            domain: "gitlab.com".to_string(),
            token: None,
            paths: vec![PathBuf::from(DEFAULT_FILE_NAME)],
            verify_tls: false,
            find_all: false,
            strip_includes: false,
            timeout: crate::lint::client::DEFAULT_TIMEOUT,
            format: OutputFormat::Human,
            use_color: false,
        }
    }
}

// Hand-written so the token never ends up in logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("domain", &self.domain)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("paths", &self.paths)
            .field("verify_tls", &self.verify_tls)
            .field("find_all", &self.find_all)
            .field("strip_includes", &self.strip_includes)
            .field("timeout", &self.timeout)
            .field("format", &self.format)
            .field("use_color", &self.use_color)
            .finish()
    }
}
