//! Visual theme and styling.

use console::Style;

use crate::lint::LintStatus;

/// Colours used when printing lint results.
#[derive(Debug, Clone)]
pub struct LintTheme {
    /// Style for file paths (green).
    pub path: Style,
    /// Style for skippable errors and notices (bright yellow).
    pub warning: Style,
    /// Style for errors (bright red).
    pub error: Style,
}

impl Default for LintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LintTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            path: Style::new().green(),
            warning: Style::new().yellow().bright(),
            error: Style::new().red().bright(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            path: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a file path, wrapped in double quotes.
    pub fn format_path(&self, path: &str) -> String {
        format!("{}", self.path.apply_to(format!("\"{}\"", path)))
    }

    /// Format a lint error in the colour of the file's status.
    pub fn format_lint_error(&self, msg: &str, status: LintStatus) -> String {
        let style = match status {
            LintStatus::ValidWithWarnings => &self.warning,
            LintStatus::Valid | LintStatus::Invalid => &self.error,
        };
        format!("{}", style.apply_to(msg))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Format a fatal error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("Error: {}", msg)))
    }
}

/// Check if colors should be enabled for stdout.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
