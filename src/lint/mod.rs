//! GitLab CI configuration linting.
//!
//! This module holds the validation pipeline. Each file goes through:
//!
//! - **Include stripping** - optional removal of `include:` blocks ([`strip_includes`])
//! - **Remote lint** - a call to the GitLab lint API ([`LintBackend`], [`GitLabClient`])
//! - **Classification** - downgrading known noise to warnings ([`classify`])
//! - **Formatting** - substituting the real file name into errors ([`format_error`])
//!
//! [`Linter`] drives the pipeline over many files and reports each one to a
//! [`ReportSink`].
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use gitlab_lint::lint::{classify, FileContext, LintResponse, LintStatus};
//!
//! let response = LintResponse::invalid(["jobs config should contain at least one visible job"]);
//! let classified = classify(response, &FileContext::new(Path::new("ci/templates.yml")));
//!
//! assert_eq!(classified.status, LintStatus::ValidWithWarnings);
//! ```

pub mod classify;
pub mod client;
pub mod format;
pub mod include;
pub mod output;
pub mod response;
pub mod runner;

/// Name the lint API assumes for every submitted file.
pub const DEFAULT_FILE_NAME: &str = ".gitlab-ci.yml";

pub use classify::{classify, normalize, FileContext, SkipList, SkipRule};
pub use client::{GitLabClient, GitLabClientBuilder, LintBackend, LintRequest};
pub use format::{format_error, format_errors};
pub use include::strip_includes;
pub use output::{
    create_sink, HumanReporter, JsonReporter, OutputFormat, RecordingSink, ReportSink,
};
pub use response::{LintResponse, LintStatus};
pub use runner::{ContentSource, FileReport, FsSource, LintOptions, Linter, RunResult};
