//! Credential extraction.
//!
//! The auth cookie takes precedence over the `token` query parameter. The
//! channel is reported alongside the token because it decides whether a new
//! cookie is issued.

use std::fmt;

use crate::auth::cookie::COOKIE_NAME;
use crate::http::request::AuthRequest;

/// Query parameter carrying a token on first contact.
pub const TOKEN_PARAM: &str = "token";

/// How a token reached the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    None,
    Cookie,
    QueryParameter,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::None => "none",
            Channel::Cookie => "cookie",
            Channel::QueryParameter => "query",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A presented token and the channel it arrived on.
///
/// `Channel::None` always carries an empty token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub channel: Channel,
}

impl Credential {
    pub fn none() -> Self {
        Self {
            token: String::new(),
            channel: Channel::None,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("channel", &self.channel)
            .finish()
    }
}

/// Determine the presented credential.
pub fn extract(request: &AuthRequest) -> Credential {
    let cookie = request
        .cookies
        .get(COOKIE_NAME)
        .map(|cookie| cookie.value_trimmed())
        .filter(|value| !value.is_empty());
    if let Some(token) = cookie {
        tracing::debug!("User token found in auth cookie");
        return Credential {
            token: token.to_string(),
            channel: Channel::Cookie,
        };
    }

    if let Some(token) = request.query.get(TOKEN_PARAM) {
        tracing::debug!("User token found in query params");
        return Credential {
            token: token.to_string(),
            channel: Channel::QueryParameter,
        };
    }

    tracing::debug!("User token not found");
    Credential::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    fn auth_request(uri: &str, cookie: Option<&str>) -> AuthRequest {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header("Cookie", cookie);
        }
        let (parts, _) = builder.body(Body::empty()).unwrap().into_parts();
        AuthRequest::from_parts(&parts)
    }

    #[test]
    fn test_cookie_takes_precedence() {
        let request = auth_request("/auth?token=from-query", Some("nibble_auth_token=from-cookie"));
        let credential = extract(&request);
        assert_eq!(credential.token, "from-cookie");
        assert_eq!(credential.channel, Channel::Cookie);
    }

    #[test]
    fn test_quoted_cookie_value_is_unquoted() {
        let request = auth_request("/auth", Some("nibble_auth_token=\"abc123\""));
        let credential = extract(&request);
        assert_eq!(credential.token, "abc123");
        assert_eq!(credential.channel, Channel::Cookie);
    }

    #[test]
    fn test_query_parameter_when_no_cookie() {
        let request = auth_request("/auth?token=from-query", Some("unrelated=1"));
        let credential = extract(&request);
        assert_eq!(credential.token, "from-query");
        assert_eq!(credential.channel, Channel::QueryParameter);
    }

    #[test]
    fn test_empty_cookie_falls_back_to_query() {
        let request = auth_request("/auth?token=from-query", Some("nibble_auth_token="));
        let credential = extract(&request);
        assert_eq!(credential.token, "from-query");
        assert_eq!(credential.channel, Channel::QueryParameter);
    }

    #[test]
    fn test_nothing_presented() {
        assert_eq!(extract(&auth_request("/auth", None)), Credential::none());
        assert_eq!(extract(&auth_request("/auth?token=", Some("nibble_auth_token="))), Credential::none());
    }

    #[test]
    fn test_debug_hides_token() {
        let credential = Credential {
            token: "abc123".into(),
            channel: Channel::QueryParameter,
        };
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("abc123"));
        assert!(rendered.contains("QueryParameter"));
    }
}
