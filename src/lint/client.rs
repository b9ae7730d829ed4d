//! Remote lint client.
//!
//! Sends configuration content to the GitLab CI lint endpoint.
//! Reference: <https://docs.gitlab.com/ee/api/lint.html>

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Serialize;

use super::response::{LintResponse, RemoteLintResponse};
use crate::config::Settings;
use crate::error::{LintError, Result};

/// Path of the lint endpoint, relative to the instance root.
pub const CI_LINT_ENDPOINT: &str = "/api/v4/ci/lint";

/// Query parameter carrying the access token.
const TOKEN_PARAM: &str = "private_token";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Content submitted for one file.
#[derive(Debug, Clone)]
pub struct LintRequest {
    /// Text sent to the service.
    pub content: String,
    /// File the content was read from.
    pub target: PathBuf,
}

/// Anything able to lint configuration content.
pub trait LintBackend {
    /// Lint one file's content.
    ///
    /// An `Err` aborts the whole run.
    fn lint(&self, request: &LintRequest) -> Result<LintResponse>;
}

#[derive(Serialize)]
struct LintBody<'a> {
    content: &'a str,
}

/// Lint client for a GitLab instance.
///
/// # Example
///
/// ```no_run
/// use gitlab_lint::lint::{GitLabClient, LintBackend, LintRequest};
///
/// let client = GitLabClient::builder("gitlab.com").token("glpat-...").build().unwrap();
/// let response = client
///     .lint(&LintRequest {
///         content: "build:\n  script: make\n".into(),
///         target: ".gitlab-ci.yml".into(),
///     })
///     .unwrap();
/// println!("{}", response.status);
/// ```
pub struct GitLabClient {
    client: Client,
    endpoint: Url,
    token: Option<String>,
    verify_tls: bool,
    timeout: Duration,
}

impl GitLabClient {
    /// Start building a client for `https://{domain}`.
    pub fn builder(domain: &str) -> GitLabClientBuilder {
        GitLabClientBuilder::new(format!("https://{}", domain))
    }

    /// Start building a client for an explicit base URL such as
    /// `http://127.0.0.1:8080`.
    pub fn with_base_url(base_url: impl Into<String>) -> GitLabClientBuilder {
        GitLabClientBuilder::new(base_url.into())
    }

    /// Build a client from resolved settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut builder = Self::builder(&settings.domain)
            .verify_tls(settings.verify_tls)
            .timeout(settings.timeout);
        if let Some(token) = &settings.token {
            builder = builder.token(token.clone());
        }
        builder.build()
    }

    /// The full endpoint URL, without credentials.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether TLS certificates are verified.
    pub fn verifies_tls(&self) -> bool {
        self.verify_tls
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_url(&self) -> Result<Url> {
        match &self.token {
            Some(token) => Url::parse_with_params(self.endpoint.as_str(), [(TOKEN_PARAM, token)])
                .map_err(|e| LintError::configuration(format!("Invalid lint endpoint: {}", e))),
            None => Ok(self.endpoint.clone()),
        }
    }
}

impl LintBackend for GitLabClient {
    fn lint(&self, request: &LintRequest) -> Result<LintResponse> {
        tracing::debug!(
            endpoint = %self.endpoint,
            target = %request.target.display(),
            bytes = request.content.len(),
            "Sending lint request"
        );

        let response = self
            .client
            .post(self.request_url()?)
            .json(&LintBody {
                content: &request.content,
            })
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().map_err(transport_error)?;

        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "Lint endpoint rejected request");
            return Err(LintError::RemoteLintFailure {
                status: status.as_u16(),
                body,
            });
        }

        let remote: RemoteLintResponse =
            serde_json::from_str(&body).map_err(|e| LintError::InvalidResponse {
                message: format!("{}: {}", e, body),
            })?;

        Ok(remote.into())
    }
}

/// The request URL carries the token, so it is dropped from the error.
fn transport_error(error: reqwest::Error) -> LintError {
    LintError::Transport(error.without_url())
}

impl fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("verify_tls", &self.verify_tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`GitLabClient`].
pub struct GitLabClientBuilder {
    base_url: String,
    token: Option<String>,
    verify_tls: bool,
    timeout: Duration,
}

impl fmt::Debug for GitLabClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabClientBuilder")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("verify_tls", &self.verify_tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GitLabClientBuilder {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
            verify_tls: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Authenticate with a personal access token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<GitLabClient> {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{}{}", base, CI_LINT_ENDPOINT)).map_err(|e| {
            LintError::configuration(format!("Invalid GitLab address '{}': {}", base, e))
        })?;

        if !self.verify_tls {
            tracing::debug!("TLS certificate verification disabled");
        }

        let client = Client::builder()
            .user_agent(concat!("gitlab-lint/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()?;

        Ok(GitLabClient {
            client,
            endpoint,
            token: self.token,
            verify_tls: self.verify_tls,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintStatus;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request(content: &str) -> LintRequest {
        LintRequest {
            content: content.to_string(),
            target: PathBuf::from(".gitlab-ci.yml"),
        }
    }

    #[test]
    fn builder_targets_https_domain() {
        let client = GitLabClient::builder("gitlab.example.com").build().unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://gitlab.example.com/api/v4/ci/lint"
        );
    }

    #[test]
    fn builder_defaults() {
        let client = GitLabClient::builder("gitlab.com").build().unwrap();
        assert!(!client.verifies_tls());
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn builder_custom_timeout_and_verification() {
        let client = GitLabClient::builder("gitlab.com")
            .verify_tls(true)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert!(client.verifies_tls());
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn builder_rejects_unparseable_domain() {
        let result = GitLabClient::builder("exa mple.com").build();
        assert!(matches!(result, Err(LintError::Configuration { .. })));
    }

    #[test]
    fn token_is_not_part_of_endpoint() {
        let client = GitLabClient::builder("gitlab.com")
            .token("secret")
            .build()
            .unwrap();
        assert!(!client.endpoint().as_str().contains("secret"));
        assert!(client
            .request_url()
            .unwrap()
            .as_str()
            .ends_with("?private_token=secret"));
    }

    #[test]
    fn posts_content_and_decodes_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v4/ci/lint")
                .json_body(json!({ "content": "build:\n  script: make\n" }));
            then.status(200)
                .json_body(json!({ "status": "valid", "errors": [], "warnings": [] }));
        });

        let client = GitLabClient::with_base_url(server.base_url()).build().unwrap();
        let response = client.lint(&request("build:\n  script: make\n")).unwrap();

        assert_eq!(response, LintResponse::valid());
        mock.assert();
    }

    #[test]
    fn sends_token_as_query_parameter() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v4/ci/lint")
                .query_param("private_token", "glpat-123");
            then.status(200)
                .json_body(json!({ "status": "invalid", "errors": ["syntax error at line 4"] }));
        });

        let client = GitLabClient::with_base_url(server.base_url())
            .token("glpat-123")
            .build()
            .unwrap();
        let response = client.lint(&request("x")).unwrap();

        assert_eq!(response.status, LintStatus::Invalid);
        assert_eq!(response.errors, vec!["syntax error at line 4".to_string()]);
        mock.assert();
    }

    #[test]
    fn non_200_is_remote_failure_with_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v4/ci/lint");
            then.status(401).body("{\"message\":\"401 Unauthorized\"}");
        });

        let client = GitLabClient::with_base_url(server.base_url()).build().unwrap();
        let err = client.lint(&request("x")).unwrap_err();

        match err {
            LintError::RemoteLintFailure { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("401 Unauthorized"));
            }
            other => panic!("Expected RemoteLintFailure, got {:?}", other),
        }
    }

    #[test]
    fn non_json_success_is_invalid_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v4/ci/lint");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = GitLabClient::with_base_url(server.base_url()).build().unwrap();
        let err = client.lint(&request("x")).unwrap_err();

        assert!(matches!(err, LintError::InvalidResponse { .. }));
        assert!(err.to_string().contains("maintenance"));
    }

    #[test]
    fn transport_error_does_not_leak_token() {
        let client = GitLabClient::with_base_url("http://127.0.0.1:1")
            .token("glpat-SECRET")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let err = client.lint(&request("x")).unwrap_err();

        assert!(matches!(err, LintError::Transport(_)));
        let msg = err.to_string();
        assert!(!msg.contains("glpat-SECRET"), "token leaked: {}", msg);
        assert!(!format!("{:?}", err).contains("glpat-SECRET"));
    }

    #[test]
    fn remote_failure_does_not_leak_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v4/ci/lint");
            then.status(403).body("{\"message\":\"403 Forbidden\"}");
        });

        let client = GitLabClient::with_base_url(server.base_url())
            .token("glpat-SECRET")
            .build()
            .unwrap();
        let err = client.lint(&request("x")).unwrap_err();

        assert!(matches!(err, LintError::RemoteLintFailure { status: 403, .. }));
        assert!(!err.to_string().contains("glpat-SECRET"));
    }

    #[test]
    fn logged_endpoint_does_not_carry_token() {
        // `lint` logs `endpoint`, never the request URL.
        let client = GitLabClient::with_base_url("http://127.0.0.1:1")
            .token("glpat-SECRET")
            .build()
            .unwrap();
        assert!(!client.endpoint().to_string().contains("glpat-SECRET"));
        assert!(client.endpoint().query().is_none());
        assert!(!format!("{:?}", client).contains("glpat-SECRET"));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let client = GitLabClient::with_base_url("http://127.0.0.1:1")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let err = client.lint(&request("x")).unwrap_err();
        assert!(matches!(err, LintError::Transport(_)));
    }
}
