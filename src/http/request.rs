//! Request inspection.
//!
//! # Responsibilities
//! - Decode the query string once, keeping parameter order
//! - Parse the `Cookie` header into a jar
//! - Extract the host the client addressed (Host header or URI authority)
//!
//! # Design Decisions
//! - Repeated query parameters resolve to their first occurrence
//! - Empty values are reported as absent

use axum::http::{header, request::Parts};
use axum_extra::extract::cookie::CookieJar;

/// Decoded query string.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw `application/x-www-form-urlencoded` query string.
    pub fn parse(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// First value for `name`, if present and non-empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

/// The parts of an inbound request the auth decision looks at.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub host: Option<String>,
    pub query: QueryParams,
    pub cookies: CookieJar,
}

impl AuthRequest {
    pub fn from_parts(parts: &Parts) -> Self {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .or_else(|| parts.uri.authority().map(|a| a.as_str().to_owned()))
            .filter(|host| !host.is_empty());

        Self {
            host,
            query: parts.uri.query().map(QueryParams::parse).unwrap_or_default(),
            cookies: CookieJar::from_headers(&parts.headers),
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}
