//! Recording sink for testing.
//!
//! `RecordingSink` captures every report for later assertion.
//!
//! # Example
//!
//! ```
//! use gitlab_lint::lint::{FileReport, LintStatus, RecordingSink, ReportSink, RunResult};
//!
//! let mut sink = RecordingSink::new();
//! let report = FileReport {
//!     path: ".gitlab-ci.yml".into(),
//!     status: LintStatus::Valid,
//!     errors: vec![],
//!     includes_stripped: false,
//! };
//! sink.report(&report).unwrap();
//!
//! assert_eq!(sink.reports(), &[report]);
//! assert!(sink.finished().is_none());
//! ```

use super::ReportSink;
use crate::lint::{FileReport, RunResult};

/// Captures reports instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: Vec<FileReport>,
    finished: Option<RunResult>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far, in order.
    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    /// The final result, if the run completed.
    pub fn finished(&self) -> Option<&RunResult> {
        self.finished.as_ref()
    }
}

impl ReportSink for RecordingSink {
    fn report(&mut self, report: &FileReport) -> std::io::Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, result: &RunResult) -> std::io::Result<()> {
        self.finished = Some(result.clone());
        Ok(())
    }
}
