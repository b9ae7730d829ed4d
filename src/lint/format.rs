//! Error message formatting.
//!
//! The lint API names every submitted file after the default pipeline file.
//! Substituting the real name makes multi-file output readable.

use std::path::Path;

use super::DEFAULT_FILE_NAME;

/// Replace every occurrence of the default file name in `raw` with
/// `real_filename`.
///
/// # Example
///
/// ```
/// use gitlab_lint::lint::format_error;
///
/// assert_eq!(
///     format_error("Local file `.gitlab-ci.yml` does not have project!", "child.yml"),
///     "Local file `child.yml` does not have project!"
/// );
/// ```
pub fn format_error(raw: &str, real_filename: &str) -> String {
    raw.replace(DEFAULT_FILE_NAME, real_filename)
}

/// Format every error of a report for the file at `path`.
///
/// Only the final path component is substituted, matching how the
/// service refers to files.
pub fn format_errors(errors: &[String], path: &Path) -> Vec<String> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    errors
        .iter()
        .map(|error| format_error(error, &filename))
        .collect()
}
