//! Argument validation and file discovery.
//!
//! Explicit paths must be files; with `--find-all` they must be directories,
//! which are searched recursively for `.yml` files. Both checks run before
//! any network activity.

use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::{DirEntry, WalkDir};

use crate::error::{LintError, Result};

const YAML_EXTENSION: &str = ".yml";

/// Check that every path suits the selected mode.
pub fn validate_paths(paths: &[PathBuf], find_all: bool) -> Result<()> {
    for path in paths {
        if !path.exists() {
            return Err(LintError::configuration(format!(
                "Path '{}' does not exist.",
                path.display()
            )));
        }
        if !find_all && path.is_dir() {
            return Err(LintError::configuration(format!(
                "You have provided a directory '{}', but not selected the --find-all option.",
                path.display()
            )));
        }
        if find_all && !path.is_dir() {
            return Err(LintError::configuration(format!(
                "You have provided a file '{}', but selected the --find-all option.",
                path.display()
            )));
        }
    }
    Ok(())
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Whether `path` names a `.yml` file, dotfiles included.
pub fn is_yaml_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.len() > YAML_EXTENSION.len() && name.ends_with(YAML_EXTENSION))
}

/// Find every `.yml` file below `dir`, sorted.
///
/// Hidden subdirectories are not searched. Symlinks are followed.
pub fn find_yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden_dir(entry));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to search {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_yaml_file(path) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "Discovered files");
    Ok(files)
}

/// Validate `paths` and expand them into the files to lint, in order.
pub fn collect_files(paths: &[PathBuf], find_all: bool) -> Result<Vec<PathBuf>> {
    validate_paths(paths, find_all)?;

    if !find_all {
        return Ok(paths.to_vec());
    }

    let mut files = Vec::new();
    for dir in paths {
        files.extend(find_yaml_files(dir)?);
    }
    Ok(files)
}
