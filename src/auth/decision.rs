//! The per-request authentication decision.
//!
//! # Data Flow
//! ```text
//! ConfigSource::load   (fresh read, never fails)
//!     → extract        (cookie, then query parameter)
//!     → Authenticator  (fixed delay, exact match)
//!     → Denied
//!     | Authenticated { cookie unless it came via cookie, redirect target }
//! ```
//!
//! Each call is independent. Nothing is carried between requests.

use std::time::Instant;

use axum_extra::extract::cookie::Cookie;

use crate::auth::authenticator::Authenticator;
use crate::auth::cookie::session_cookie;
use crate::auth::extractor::{extract, Channel};
use crate::auth::redirect;
use crate::config::ConfigSource;
use crate::http::request::AuthRequest;
use crate::observability::metrics;

/// Outcome of one authentication attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Denied,
    Authenticated {
        /// Fresh session cookie, absent when the client already sent one.
        cookie: Option<Cookie<'static>>,
        redirect_to: String,
    },
}

impl Decision {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Decision::Authenticated { .. })
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Decision::Denied => "denied",
            Decision::Authenticated { .. } => "authenticated",
        }
    }
}

/// Runs the decision flow against a config source.
#[derive(Debug, Clone)]
pub struct Gate {
    source: ConfigSource,
    authenticator: Authenticator,
    allow_empty_secret: bool,
}

impl Gate {
    pub fn new(source: ConfigSource, authenticator: Authenticator) -> Self {
        Self {
            source,
            authenticator,
            allow_empty_secret: false,
        }
    }

    /// Let an empty configured secret authenticate a request with no token.
    pub fn allow_empty_secret(mut self, allow: bool) -> Self {
        self.allow_empty_secret = allow;
        self
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub async fn decide(&self, request: &AuthRequest) -> Decision {
        let start = Instant::now();
        let decision = self.evaluate(request).await;
        metrics::record_decision(decision.outcome(), start);
        decision
    }

    async fn evaluate(&self, request: &AuthRequest) -> Decision {
        let config = self.source.load().await;
        let credential = extract(request);
        let matched = self
            .authenticator
            .authenticate(&config, &credential.token)
            .await;

        if !config.has_secret() && !self.allow_empty_secret {
            tracing::warn!(
                path = %self.source.path().display(),
                "No secret token configured, denying request"
            );
            return Decision::Denied;
        }

        if !matched {
            tracing::info!(channel = %credential.channel, "Authentication failed");
            return Decision::Denied;
        }

        tracing::info!(channel = %credential.channel, "Authentication succeeded");

        // Re-issuing on the cookie channel would reset the original expiry.
        let cookie = match credential.channel {
            Channel::Cookie => None,
            Channel::QueryParameter | Channel::None => {
                tracing::debug!(host = ?request.host(), "Setting authentication cookie");
                Some(session_cookie(request.host(), &config))
            }
        };

        let redirect_to = redirect::resolve(&request.query, &config);
        tracing::debug!(redirect_to = %redirect_to, "Redirecting");

        Decision::Authenticated { cookie, redirect_to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn gate_with(contents: Option<&str>) -> (Gate, Option<NamedTempFile>) {
        let (path, file) = match contents {
            Some(contents) => {
                let file = NamedTempFile::new().unwrap();
                std::fs::write(file.path(), contents).unwrap();
                (file.path().to_path_buf(), Some(file))
            }
            None => (std::env::temp_dir().join("nibble-auth-absent/config.json"), None),
        };
        let gate = Gate::new(ConfigSource::new(path), Authenticator::new(Duration::ZERO));
        (gate, file)
    }

    fn request(uri: &str, cookie: Option<&str>) -> AuthRequest {
        let mut builder = Request::builder().uri(uri).header("Host", "nibble.example.com:10001");
        if let Some(cookie) = cookie {
            builder = builder.header("Cookie", cookie);
        }
        let (parts, _) = builder.body(Body::empty()).unwrap().into_parts();
        AuthRequest::from_parts(&parts)
    }

    const CONFIG: &str = r#"{"token": "abc123"}"#;

    #[tokio::test]
    async fn test_cookie_channel_is_not_reissued() {
        let (gate, _file) = gate_with(Some(CONFIG));
        let decision = gate
            .decide(&request("/auth", Some("nibble_auth_token=abc123")))
            .await;
        assert_eq!(
            decision,
            Decision::Authenticated {
                cookie: None,
                redirect_to: "/".into()
            }
        );
    }

    #[tokio::test]
    async fn test_query_channel_issues_cookie() {
        let (gate, _file) = gate_with(Some(CONFIG));
        let decision = gate
            .decide(&request("/auth?token=abc123&redirect_to=/dashboard", None))
            .await;
        let Decision::Authenticated { cookie, redirect_to } = decision else {
            panic!("expected authenticated, got {decision:?}");
        };
        let cookie = cookie.expect("cookie issued");
        assert_eq!(cookie.value(), "abc123");
        assert_eq!(cookie.domain(), Some("nibble.example.com"));
        assert_eq!(redirect_to, "/dashboard");
    }

    #[tokio::test]
    async fn test_wrong_token_is_denied() {
        let (gate, _file) = gate_with(Some(CONFIG));
        let decision = gate.decide(&request("/auth?token=wrong", None)).await;
        assert_eq!(decision, Decision::Denied);
        assert!(!decision.is_authenticated());
        assert_eq!(decision.outcome(), "denied");
    }

    #[tokio::test]
    async fn test_stale_cookie_does_not_fall_back_to_query() {
        let (gate, _file) = gate_with(Some(CONFIG));
        let decision = gate
            .decide(&request("/auth?token=abc123", Some("nibble_auth_token=old")))
            .await;
        assert_eq!(decision, Decision::Denied);
    }

    #[tokio::test]
    async fn test_missing_config_denies() {
        let (gate, _file) = gate_with(None);
        assert_eq!(gate.decide(&request("/auth?token=abc123", None)).await, Decision::Denied);
        assert_eq!(gate.decide(&request("/auth", None)).await, Decision::Denied);
    }

    #[tokio::test]
    async fn test_malformed_config_denies() {
        let (gate, _file) = gate_with(Some("token = abc123"));
        assert_eq!(gate.decide(&request("/auth?token=abc123", None)).await, Decision::Denied);
        assert_eq!(gate.decide(&request("/auth", None)).await, Decision::Denied);
    }

    #[tokio::test]
    async fn test_allow_empty_secret_restores_plain_comparison() {
        let (gate, _file) = gate_with(Some("{}"));
        let gate = gate.allow_empty_secret(true);

        let decision = gate.decide(&request("/auth", None)).await;
        assert!(decision.is_authenticated());
        assert_eq!(gate.decide(&request("/auth?token=abc", None)).await, Decision::Denied);
    }

    #[tokio::test]
    async fn test_rotated_secret_applies_to_next_request() {
        let (gate, file) = gate_with(Some(CONFIG));
        let file = file.unwrap();
        assert!(gate.decide(&request("/auth?token=abc123", None)).await.is_authenticated());

        std::fs::write(file.path(), r#"{"token": "rotated"}"#).unwrap();
        assert_eq!(gate.decide(&request("/auth?token=abc123", None)).await, Decision::Denied);
        assert!(gate.decide(&request("/auth?token=rotated", None)).await.is_authenticated());
    }
}
