//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::lint::{OutputFormat, DEFAULT_FILE_NAME};

/// gll - lint .gitlab-ci.yml files using the GitLab API.
#[derive(Debug, Parser)]
#[command(name = "gll")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitLab domain
    #[arg(short, long, env = "GITLAB_LINT_DOMAIN", default_value = "gitlab.com")]
    pub domain: String,

    /// GitLab personal access token, needed when includes reference other projects
    #[arg(short, long, env = "GITLAB_LINT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to a .yml file, or a directory with --find-all (can be repeated)
    #[arg(short, long = "path", value_name = "PATH", default_value = DEFAULT_FILE_NAME)]
    pub paths: Vec<PathBuf>,

    /// Enable HTTPS certificate verification (disabled by default for self-hosted instances)
    #[arg(short, long)]
    pub verify: bool,

    /// Search the directories given with --path recursively and check all .yml files
    #[arg(short, long)]
    pub find_all: bool,

    /// Remove include: blocks before sending files to the API
    #[arg(short = 's', long)]
    pub skip_includes: bool,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "GITLAB_LINT_TIMEOUT",
        default_value_t = 30,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
