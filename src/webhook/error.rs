use thiserror::Error;

/// Raised once at construction time when required parameters are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required parameters: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Failures while turning a request body into a validated request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("passed empty body")]
    EmptyBody,
    #[error("json decode failed: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Failures while building or serializing a response.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("status must be either '{exists}' or '{not_exists}'")]
    InvalidStatus {
        exists: &'static str,
        not_exists: &'static str,
    },
    #[error("json encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}
