//! gitlab-lint - validate GitLab CI configuration files.
//!
//! Files are sent to the GitLab CI lint API one at a time. Errors that are
//! only noise for files pulled in through `include:` are downgraded to
//! warnings, and error messages are rewritten to name the real file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the lint command
//! - [`config`] - Run settings resolved from flags and environment
//! - [`discovery`] - Argument validation and `.yml` file discovery
//! - [`error`] - Error types and result aliases
//! - [`lint`] - The validation pipeline
//! - [`ui`] - Terminal colours
//!
//! # Example
//!
//! ```
//! use gitlab_lint::lint::{format_error, strip_includes};
//!
//! let content = strip_includes("include:\n  - local: a.yml\njob: {}\n", true);
//! assert_eq!(content, "job: {}\n");
//!
//! let error = format_error("Local file `.gitlab-ci.yml` does not have project!", "a.yml");
//! assert_eq!(error, "Local file `a.yml` does not have project!");
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod lint;
pub mod ui;

pub use error::{LintError, Result};
