//! Error types for gitlab-lint operations.
//!
//! This module defines [`LintError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is fatal for the run it occurs in; an `invalid` lint
//!   outcome is a normal result, not an error
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gitlab-lint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// Invalid combination of command-line arguments.
    #[error("{message}")]
    Configuration { message: String },

    /// The lint endpoint answered with a non-200 status.
    #[error(
        "API endpoint returned invalid response (HTTP {status}):\n{body}\nconfirm your `domain` and `token` have been set correctly"
    )]
    RemoteLintFailure { status: u16, body: String },

    /// The lint endpoint could not be reached.
    #[error("Failed to reach lint endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The lint endpoint answered 200 with an unexpected body.
    #[error("Unexpected response from lint endpoint: {message}")]
    InvalidResponse { message: String },

    /// A file selected for validation could not be read.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintError {
    /// Shorthand for a [`LintError::Configuration`] error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for gitlab-lint operations.
pub type Result<T> = std::result::Result<T, LintError>;
