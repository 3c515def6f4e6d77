//! Text generation errors

use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Failed to connect to the generation server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the generation server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server returned a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generation timed out
    #[error("Generation timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(60_000)
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
    fn connection_failed_error_message() {
        let err = GenerationError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn server_error_message() {
        let err = GenerationError::ServerError("status 500".to_string());
        assert_eq!(err.to_string(), "Server error: status 500");
    }

    #[test]
    fn timeout_error_message() {
        let err = GenerationError::Timeout(60_000);
        assert_eq!(err.to_string(), "Generation timeout after 60000ms");
    }

    #[test]
    fn invalid_response_error_message() {
        let err = GenerationError::InvalidResponse("missing choices".to_string());
        assert_eq!(err.to_string(), "Invalid response: missing choices");
    }
}
