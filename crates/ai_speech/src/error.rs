//! Speech synthesis errors

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to a speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to a speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Engine produced an undersized or empty output file
    #[error("Undersized output: {size} bytes is below the {min} byte minimum")]
    UndersizedOutput {
        /// Size of the produced file
        size: u64,
        /// Minimum valid size
        min: u64,
    },

    /// Input text outside accepted bounds
    #[error("Text too long: {len} characters exceeds maximum of {max}")]
    TextTooLong { len: usize, max: usize },

    /// Input text was empty
    #[error("Cannot synthesize empty text")]
    EmptyText,

    /// Synthesis timed out
    #[error("Speech synthesis timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Engine not available (not installed or not configured)
    #[error("Engine not available: {0}")]
    NotAvailable(String),

    /// Filesystem error while writing or validating an artifact
    #[error("Artifact I/O failed: {0}")]
    ArtifactIo(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30_000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

impl From<std::io::Error> for SpeechError {
    fn from(err: std::io::Error) -> Self {
        Self::ArtifactIo(err.to_string())
    }
}
