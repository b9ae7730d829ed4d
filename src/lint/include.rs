//! Include stripping.
//!
//! Removes `include:` blocks from a configuration before it is sent to the
//! lint API, so that included files are not resolved remotely.
//!
//! Matching is textual, not structural: any line containing `include:`
//! opens a block, and the block runs for as long as the following lines
//! look like sequence items (`optional whitespace, a dash, anything`).
//! Mapping-style items spread over several lines and flow syntax are not
//! understood.

use std::sync::LazyLock;

use regex::Regex;

const INCLUDE_KEY: &str = "include:";

static SEQUENCE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-.*$").expect("SEQUENCE_ITEM must compile"));

/// Strip `include:` blocks from `content` when `enabled`.
///
/// Line endings of the kept lines are preserved byte for byte.
///
/// # Example
///
/// ```
/// use gitlab_lint::lint::strip_includes;
///
/// let content = "include:\n  - local: a.yml\nbuild:\n  script: make\n";
/// assert_eq!(strip_includes(content, true), "build:\n  script: make\n");
/// assert_eq!(strip_includes(content, false), content);
/// ```
pub fn strip_includes(content: &str, enabled: bool) -> String {
    if !enabled {
        return content.to_string();
    }

    let mut stripped = String::with_capacity(content.len());
    let mut in_block = false;

    for line in content.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);

        if in_block {
            if SEQUENCE_ITEM.is_match(text) {
                continue;
            }
            in_block = false;
        }

        if text.contains(INCLUDE_KEY) {
            in_block = true;
            continue;
        }

        stripped.push_str(line);
    }

    stripped
}
