//! Session cookie construction.

use axum_extra::extract::cookie::Cookie;
use time::{Duration, OffsetDateTime};

use crate::config::NibbleConfig;

/// Name of the auth cookie, read on requests and set on responses.
pub const COOKIE_NAME: &str = "nibble_auth_token";

/// Cookie lifetime in seconds (one day).
pub const COOKIE_MAX_AGE_SECS: i64 = 3600 * 24;

/// Strip the port from a `Host` value.
///
/// Bracketed IPv6 literals lose their brackets. A bare IPv6 literal, which
/// cannot carry a port, is returned unchanged.
pub fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    match host.split_once(':') {
        Some((name, port)) if !port.contains(':') => name,
        _ => host,
    }
}

/// Build the session cookie carrying the configured secret.
///
/// Scoped to `host` without its port; no `Domain` attribute is set when the
/// host is unknown.
pub fn session_cookie(host: Option<&str>, config: &NibbleConfig) -> Cookie<'static> {
    let max_age = Duration::seconds(COOKIE_MAX_AGE_SECS);
    let builder = Cookie::build((COOKIE_NAME, config.token.clone()))
        .max_age(max_age)
        .expires(OffsetDateTime::now_utc() + max_age)
        .http_only(true)
        .secure(true);

    match host.map(strip_port).filter(|domain| !domain.is_empty()) {
        Some(domain) => builder.domain(domain.to_string()).build(),
        None => builder.build(),
    }
}
