//! JSON output.
//!
//! Buffers every report and writes a single machine-readable document once
//! the run finishes.

use std::io::Write;

use serde::Serialize;

use super::ReportSink;
use crate::lint::{FileReport, RunResult};

/// Writes lint results as one JSON document.
pub struct JsonReporter<W: Write> {
    writer: W,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: &'a [FileReport],
    exit_code: i32,
}

impl<W: Write> JsonReporter<W> {
    /// Create a new JSON reporter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReporter<W> {
    fn report(&mut self, _report: &FileReport) -> std::io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, result: &RunResult) -> std::io::Result<()> {
        let output = JsonOutput {
            files: &result.files,
            exit_code: result.exit_code(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &output)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
