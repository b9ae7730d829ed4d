//! Human-readable output.
//!
//! Prints `"<path>" is <status>` per file followed by its errors, one per
//! line and indented with a tab, coloured by severity.

use std::io::Write;

use super::ReportSink;
use crate::lint::{FileReport, LintStatus, RunResult};
use crate::ui::LintTheme;

/// Writes lint results for terminal display.
pub struct HumanReporter<W: Write> {
    writer: W,
    theme: LintTheme,
}

impl<W: Write> HumanReporter<W> {
    /// Create a reporter, with ANSI colours if `use_color`.
    pub fn new(writer: W, use_color: bool) -> Self {
        let theme = if use_color {
            LintTheme::new()
        } else {
            LintTheme::plain()
        };
        Self { writer, theme }
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for HumanReporter<W> {
    fn report(&mut self, report: &FileReport) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "{} is {}",
            self.theme.format_path(&report.path.display().to_string()),
            report.status
        )?;

        for error in &report.errors {
            writeln!(
                self.writer,
                "\t{}",
                self.theme.format_lint_error(error, report.status)
            )?;
        }

        Ok(())
    }

    fn finish(&mut self, result: &RunResult) -> std::io::Result<()> {
        if result.files.is_empty() {
            return writeln!(self.writer, "{}", self.theme.format_warning("No .yml files found"));
        }

        writeln!(
            self.writer,
            "Checked {} file(s): {} valid, {} with warnings, {} invalid",
            result.files.len(),
            result.count(LintStatus::Valid),
            result.count(LintStatus::ValidWithWarnings),
            result.count(LintStatus::Invalid)
        )?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(path: &str, status: LintStatus, errors: &[&str]) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            status,
            errors: errors.iter().map(|e| e.to_string()).collect(),
            includes_stripped: false,
        }
    }

    fn render(reports: &[FileReport]) -> String {
        let mut reporter = HumanReporter::new(Vec::new(), false);
        for r in reports {
            reporter.report(r).unwrap();
        }
        reporter
            .finish(&RunResult {
                files: reports.to_vec(),
            })
            .unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn formats_status_line_with_quoted_path() {
        let output = render(&[report(".gitlab-ci.yml", LintStatus::Valid, &[])]);
        assert!(output.starts_with("\".gitlab-ci.yml\" is valid\n"));
    }

    #[test]
    fn formats_errors_indented_with_tab() {
        let output = render(&[report(
            "ci/child.yml",
            LintStatus::ValidWithWarnings,
            &["jobs config should contain at least one visible job"],
        )]);
        assert!(output.contains("\"ci/child.yml\" is valid with warnings\n"));
        assert!(output.contains("\tjobs config should contain at least one visible job\n"));
    }

    #[test]
    fn formats_summary_line() {
        let output = render(&[
            report("a.yml", LintStatus::Valid, &[]),
            report("b.yml", LintStatus::ValidWithWarnings, &["w"]),
            report("c.yml", LintStatus::Invalid, &["e"]),
        ]);
        assert!(output.contains("Checked 3 file(s): 1 valid, 1 with warnings, 1 invalid"));
    }

    #[test]
    fn empty_run_mentions_no_files() {
        let output = render(&[]);
        assert!(output.contains("No .yml files found"));
        assert!(!output.contains("Checked"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let output = render(&[report("c.yml", LintStatus::Invalid, &["boom"])]);
        assert!(!output.contains('\u{1b}'));
    }
}
