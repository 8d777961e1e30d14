//! Configuration validation.
//!
//! Semantic checks on process settings that serde and clap cannot express.
//! Runs before the router is built, so an invalid endpoint is rejected at
//! startup instead of panicking inside axum.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint must not be empty")]
    EmptyEndpoint,

    #[error("endpoint '{0}' must start with '/'")]
    RelativeEndpoint(String),

    #[error("endpoint '{0}' contains route pattern characters")]
    PatternEndpoint(String),
}

/// Check that `endpoint` is a literal URL path axum can mount.
pub fn validate_endpoint(endpoint: &str) -> Result<String, ValidationError> {
    if endpoint.is_empty() {
        return Err(ValidationError::EmptyEndpoint);
    }
    if !endpoint.starts_with('/') {
        return Err(ValidationError::RelativeEndpoint(endpoint.to_string()));
    }
    let has_pattern = endpoint
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
        || endpoint.contains(['{', '}']);
    if has_pattern {
        return Err(ValidationError::PatternEndpoint(endpoint.to_string()));
    }
    Ok(endpoint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint() {
        assert_eq!(validate_endpoint("/auth"), Ok("/auth".to_string()));
        assert_eq!(validate_endpoint("/nibble/auth"), Ok("/nibble/auth".to_string()));
        assert_eq!(validate_endpoint(""), Err(ValidationError::EmptyEndpoint));
        assert_eq!(
            validate_endpoint("auth"),
            Err(ValidationError::RelativeEndpoint("auth".into()))
        );
        assert!(matches!(
            validate_endpoint("/{id}"),
            Err(ValidationError::PatternEndpoint(_))
        ));
        assert!(matches!(
            validate_endpoint("/auth/:id"),
            Err(ValidationError::PatternEndpoint(_))
        ));
        assert!(matches!(
            validate_endpoint("/*rest"),
            Err(ValidationError::PatternEndpoint(_))
        ));
    }
}
