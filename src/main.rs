//! gll CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gitlab_lint::cli::{Cli, LintCommand};
use gitlab_lint::config::Settings;
use gitlab_lint::ui::LintTheme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so that `--format json` output stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gitlab_lint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gitlab_lint=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let settings = Settings::from_cli(&cli);
    tracing::debug!("gll starting with {:?}", settings);

    let theme = if settings.use_color {
        LintTheme::new()
    } else {
        LintTheme::plain()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match LintCommand::new(settings).execute(&mut out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{}", theme.format_error(&e.to_string()));
            ExitCode::from(1)
        }
    }
}
