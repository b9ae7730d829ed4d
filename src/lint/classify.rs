//! Result classification.
//!
//! The lint API assumes every submitted file is the root pipeline
//! configuration. Files that are only ever pulled in through `include:`
//! legitimately trigger some structural errors, which are downgraded here
//! to warnings so they stay visible without failing the run.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::response::{LintResponse, LintStatus};
use super::DEFAULT_FILE_NAME;

/// Replaces quoted tokens during normalization.
pub const PLACEHOLDER: &str = "X";

static QUOTED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`.+`").expect("QUOTED_TOKEN must compile"));

/// Replace every backtick-quoted token in `error` with [`PLACEHOLDER`].
///
/// Normalizing an already normalized message is a no-op.
pub fn normalize(error: &str) -> String {
    QUOTED_TOKEN.replace_all(error, PLACEHOLDER).into_owned()
}

/// An error message that is noise under some file context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipRule {
    /// A file without visible jobs, typical for fragments holding templates.
    NoVisibleJobs,
    /// A `local` include that cannot be resolved without project context.
    LocalFileWithoutProject,
}

impl SkipRule {
    /// Every built-in rule.
    pub const ALL: [SkipRule; 2] = [SkipRule::NoVisibleJobs, SkipRule::LocalFileWithoutProject];

    /// Message pattern; quoted segments match any quoted token.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::NoVisibleJobs => "jobs config should contain at least one visible job",
            Self::LocalFileWithoutProject => "Local file `X` does not have project!",
        }
    }

    /// Whether this rule applies to the given file.
    pub fn applies_to(&self, file: &FileContext<'_>) -> bool {
        match self {
            Self::NoVisibleJobs => true,
            Self::LocalFileWithoutProject => !file.is_primary(),
        }
    }

    /// Whether `normalized` (see [`normalize`]) is matched by this rule.
    pub fn matches(&self, normalized: &str) -> bool {
        normalize(self.pattern()) == normalized
    }
}

/// What the classifier knows about the file a response belongs to.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// Path of the file as it was given or discovered.
    pub path: &'a Path,
    /// Whether `include:` blocks were stripped before linting.
    pub includes_stripped: bool,
}

impl<'a> FileContext<'a> {
    /// Context for `path`, with includes left in place.
    pub fn new(path: &'a Path) -> Self {
        Self {
            path,
            includes_stripped: false,
        }
    }

    /// Whether this file is the root pipeline configuration, named
    /// exactly [`DEFAULT_FILE_NAME`].
    pub fn is_primary(&self) -> bool {
        self.path
            .file_name()
            .is_some_and(|name| name == DEFAULT_FILE_NAME)
    }
}

/// The skip rules that apply to one file.
///
/// Built fresh for every classification from the immutable rule set.
#[derive(Debug, Clone)]
pub struct SkipList {
    rules: Vec<SkipRule>,
}

impl SkipList {
    /// Collect the rules applicable to `file`.
    pub fn for_file(file: &FileContext<'_>) -> Self {
        Self {
            rules: SkipRule::ALL
                .into_iter()
                .filter(|rule| rule.applies_to(file))
                .collect(),
        }
    }

    /// The rules in this list.
    pub fn rules(&self) -> &[SkipRule] {
        &self.rules
    }

    /// Whether `error` can be ignored.
    pub fn should_skip(&self, error: &str) -> bool {
        let normalized = normalize(error);
        self.rules.iter().any(|rule| rule.matches(&normalized))
    }
}

/// Reclassify a response into valid / valid with warnings / invalid.
///
/// `valid` responses are returned untouched. Otherwise the status becomes
/// `invalid` if any error survives the skip list, and `valid with warnings`
/// if none does. The error list itself is never modified.
pub fn classify(mut response: LintResponse, file: &FileContext<'_>) -> LintResponse {
    if response.status == LintStatus::Valid {
        return response;
    }

    let skip_list = SkipList::for_file(file);
    let mut status = LintStatus::ValidWithWarnings;
    for error in &response.errors {
        if !skip_list.should_skip(error) {
            tracing::debug!(path = %file.path.display(), error = %error, "Error is not skippable");
            status = LintStatus::Invalid;
        }
    }

    tracing::debug!(
        path = %file.path.display(),
        primary = file.is_primary(),
        includes_stripped = file.includes_stripped,
        status = %status,
        "Classified lint response"
    );
    response.status = status;
    response
}
