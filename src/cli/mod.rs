//! Command-line interface for gitlab-lint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the lint command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The lint command

pub mod args;
pub mod command;

pub use args::Cli;
pub use command::{CommandResult, LintCommand};
