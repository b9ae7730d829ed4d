//! Run aggregation.
//!
//! Drives every file through `read -> strip includes -> lint -> classify ->
//! format -> report`, one file at a time and in the order given, and derives
//! the process exit code from the collected statuses.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::classify::{classify, FileContext};
use super::client::{LintBackend, LintRequest};
use super::format::format_errors;
use super::include::strip_includes;
use super::output::ReportSink;
use super::response::LintStatus;
use crate::error::{LintError, Result};

/// Source of file contents.
pub trait ContentSource {
    /// Read the whole file at `path` as text.
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Options shared by every file of a run.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Strip `include:` blocks before linting.
    pub strip_includes: bool,
}

/// Final outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: LintStatus,
    /// Errors with the real file name substituted.
    pub errors: Vec<String>,
    pub includes_stripped: bool,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub files: Vec<FileReport>,
}

impl RunResult {
    /// Whether every file ended valid or valid with warnings.
    pub fn passed(&self) -> bool {
        self.files.iter().all(|report| report.status.is_passing())
    }

    /// 0 when the run passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Number of files that ended with `status`.
    pub fn count(&self, status: LintStatus) -> usize {
        self.files
            .iter()
            .filter(|report| report.status == status)
            .count()
    }
}

/// Validates files against a lint backend.
pub struct Linter {
    backend: Box<dyn LintBackend>,
    source: Box<dyn ContentSource>,
    options: LintOptions,
}

impl Linter {
    /// Create a linter reading files from disk.
    pub fn new(backend: Box<dyn LintBackend>, options: LintOptions) -> Self {
        Self {
            backend,
            source: Box::new(FsSource),
            options,
        }
    }

    /// Replace the content source.
    pub fn with_source(mut self, source: Box<dyn ContentSource>) -> Self {
        self.source = source;
        self
    }

    /// Validate a single file.
    pub fn process(&self, path: &Path) -> Result<FileReport> {
        let content = self.source.read(path).map_err(|source| LintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let content = strip_includes(&content, self.options.strip_includes);
        let request = LintRequest {
            content,
            target: path.to_path_buf(),
        };
        let response = self.backend.lint(&request)?;

        let file = FileContext {
            path,
            includes_stripped: self.options.strip_includes,
        };
        let response = classify(response, &file);

        Ok(FileReport {
            path: path.to_path_buf(),
            status: response.status,
            errors: format_errors(&response.errors, path),
            includes_stripped: self.options.strip_includes,
        })
    }

    /// Validate `paths` in order, reporting each file to `sink` as soon as
    /// it is classified.
    ///
    /// The first fatal error aborts the run; files already reported stay
    /// reported and [`ReportSink::finish`] is not called.
    pub fn run(&self, paths: &[PathBuf], sink: &mut dyn ReportSink) -> Result<RunResult> {
        tracing::info!(files = paths.len(), "Starting lint run");

        let mut result = RunResult::default();
        for path in paths {
            let report = self.process(path)?;
            tracing::debug!(path = %path.display(), status = %report.status, "File processed");
            sink.report(&report)?;
            result.files.push(report);
        }

        tracing::info!(
            files = result.files.len(),
            exit_code = result.exit_code(),
            "Lint run finished"
        );
        sink.finish(&result)?;
        Ok(result)
    }
}
