//! Lint result sinks.
//!
//! This module provides sinks that present lint results in different
//! formats (human-readable, JSON), plus a recording sink for tests.

pub mod human;
pub mod json;
pub mod recording;

use std::io::Write;

use crate::lint::{FileReport, RunResult};

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Receives lint results as the run progresses.
pub trait ReportSink {
    /// Called once per file, right after it was classified.
    fn report(&mut self, report: &FileReport) -> std::io::Result<()>;

    /// Called once after every file was reported.
    fn finish(&mut self, result: &RunResult) -> std::io::Result<()>;
}

/// Create a sink writing `format` to `writer`.
pub fn create_sink<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    use_color: bool,
) -> Box<dyn ReportSink + 'a> {
    match format {
        OutputFormat::Human => Box::new(HumanReporter::new(writer, use_color)),
        OutputFormat::Json => Box::new(JsonReporter::new(writer)),
    }
}

pub use human::HumanReporter;
pub use json::JsonReporter;
pub use recording::RecordingSink;
