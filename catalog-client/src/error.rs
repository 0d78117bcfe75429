//! Client error types

use std::time::Duration;

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (connection refused, DNS, TLS, body read...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx response other than 404
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected before reaching the network
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response body did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client could not be configured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Network, timeout and non-2xx failures
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_) | Self::Status { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether repeating the same request could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::NotFound(_)
            | Self::InvalidRequest(_)
            | Self::Serialization(_)
            | Self::InvalidConfig(_) => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let timeout = ClientError::Timeout(Duration::from_secs(15));
        assert!(timeout.is_transport());
        assert!(timeout.is_retryable());

        let server = ClientError::Status { status: 503, body: "busy".into() };
        assert!(server.is_transport());
        assert!(server.is_retryable());

        let bad_request = ClientError::Status { status: 400, body: "nope".into() };
        assert!(bad_request.is_transport());
        assert!(!bad_request.is_retryable());

        let missing = ClientError::NotFound("Product with id '0' not found".into());
        assert!(missing.is_not_found());
        assert!(!missing.is_transport());
        assert!(!missing.is_retryable());

        let invalid = ClientError::InvalidRequest("limit must be positive".into());
        assert!(!invalid.is_transport());
        assert!(!invalid.is_retryable());
    }

    #[test]
    fn test_display() {
        let err = ClientError::Status { status: 500, body: "boom".into() };
        assert_eq!(err.to_string(), "Unexpected status 500: boom");
        assert_eq!(
            ClientError::NotFound("product 7".into()).to_string(),
            "Not found: product 7"
        );
    }
}
