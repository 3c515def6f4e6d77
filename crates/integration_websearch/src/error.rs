//! Web search error types
//!
//! Internal to the agent: every error here is converted into static
//! fallback insight lines before reaching a caller.

use thiserror::Error;

/// Errors that can occur inside the knowledge agent
#[derive(Debug, Error)]
pub enum WebSearchError {
    /// Connection to the search service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the search service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service returned a non-success status
    #[error("Service error: {0}")]
    ServiceError(String),

    /// Failed to parse the service response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No API key configured
    #[error("No API key configured")]
    MissingApiKey,

    /// Request timed out
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        timeout_ms: u64,
    },
}

impl From<reqwest::Error> for WebSearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_ms: 30_000 }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_message() {
        let err = WebSearchError::ServiceError("status 500".to_string());
        assert_eq!(err.to_string(), "Service error: status 500");
    }

    #[test]
    fn missing_key_message() {
        assert_eq!(WebSearchError::MissingApiKey.to_string(), "No API key configured");
    }

    #[test]
    fn timeout_message_includes_duration() {
        let err = WebSearchError::Timeout { timeout_ms: 30_000 };
        assert!(err.to_string().contains("30000"));
    }
}
