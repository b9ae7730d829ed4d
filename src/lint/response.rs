//! Lint responses.
//!
//! The remote service only knows two outcomes, `valid` and `invalid`.
//! [`LintStatus::ValidWithWarnings`] is introduced locally by the
//! classifier when every reported error is known noise.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final status of a linted file.
///
/// Ordered by severity, so `Valid < ValidWithWarnings < Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LintStatus {
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "valid with warnings")]
    ValidWithWarnings,
    #[serde(rename = "invalid")]
    Invalid,
}

impl LintStatus {
    /// Whether this status lets the run pass.
    pub fn is_passing(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Text used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::ValidWithWarnings => "valid with warnings",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for LintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status values the remote service is able to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteStatus {
    Valid,
    Invalid,
}

impl From<RemoteStatus> for LintStatus {
    fn from(status: RemoteStatus) -> Self {
        match status {
            RemoteStatus::Valid => Self::Valid,
            RemoteStatus::Invalid => Self::Invalid,
        }
    }
}

/// Body of a successful `POST /api/v4/ci/lint` call.
///
/// Fields other than `status` and `errors` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteLintResponse {
    pub status: RemoteStatus,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Outcome of linting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResponse {
    pub status: LintStatus,
    /// Errors in the order the service reported them.
    pub errors: Vec<String>,
}

impl LintResponse {
    /// Create a response with the given status and errors.
    pub fn new(status: LintStatus, errors: Vec<String>) -> Self {
        Self { status, errors }
    }

    /// A `valid` response with no errors.
    pub fn valid() -> Self {
        Self::new(LintStatus::Valid, Vec::new())
    }

    /// An `invalid` response carrying the given errors.
    pub fn invalid<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            LintStatus::Invalid,
            errors.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<RemoteLintResponse> for LintResponse {
    fn from(remote: RemoteLintResponse) -> Self {
        Self::new(remote.status.into(), remote.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_report_text() {
        assert_eq!(LintStatus::Valid.to_string(), "valid");
        assert_eq!(
            LintStatus::ValidWithWarnings.to_string(),
            "valid with warnings"
        );
        assert_eq!(LintStatus::Invalid.to_string(), "invalid");
    }

    #[test]
    fn status_is_ordered_by_severity() {
        assert!(LintStatus::Valid < LintStatus::ValidWithWarnings);
        assert!(LintStatus::ValidWithWarnings < LintStatus::Invalid);
    }

    #[test]
    fn only_invalid_fails() {
        assert!(LintStatus::Valid.is_passing());
        assert!(LintStatus::ValidWithWarnings.is_passing());
        assert!(!LintStatus::Invalid.is_passing());
    }

    #[test]
    fn decodes_remote_body_ignoring_extra_fields() {
        let body = r#"{"status":"invalid","errors":["syntax error at line 4"],"warnings":[],"merged_yaml":"x"}"#;
        let remote: RemoteLintResponse = serde_json::from_str(body).unwrap();
        let response = LintResponse::from(remote);

        assert_eq!(response.status, LintStatus::Invalid);
        assert_eq!(response.errors, vec!["syntax error at line 4".to_string()]);
    }

    #[test]
    fn decodes_remote_body_without_errors() {
        let remote: RemoteLintResponse = serde_json::from_str(r#"{"status":"valid"}"#).unwrap();
        assert_eq!(LintResponse::from(remote), LintResponse::valid());
    }

    #[test]
    fn rejects_unknown_remote_status() {
        let result = serde_json::from_str::<RemoteLintResponse>(r#"{"status":"valid with warnings"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn status_serializes_as_report_text() {
        let json = serde_json::to_string(&LintStatus::ValidWithWarnings).unwrap();
        assert_eq!(json, "\"valid with warnings\"");
    }
}
