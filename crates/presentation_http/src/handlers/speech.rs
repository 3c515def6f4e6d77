//! Speech synthesis handler

use ai_speech::AudioFormat;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, state::AppState};

/// Speech synthesis request body
#[derive(Debug, Deserialize, Validate)]
pub struct TtsRequest {
    /// Text to synthesize
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
    /// Voice override
    #[serde(default)]
    pub voice: Option<String>,
    /// Speed override (bare number or signed percent)
    #[serde(default)]
    pub speed: Option<String>,
    /// Output format extension (mp3, wav, ogg)
    #[serde(default)]
    pub format: Option<String>,
}

/// Speech synthesis response body
#[derive(Debug, Serialize)]
pub struct TtsResponse {
    /// URL the artifact is served under
    pub audio_url: String,
    /// Deterministic cache key
    pub cache_key: String,
    /// Output format extension
    pub format: String,
    /// Whether the artifact came from the cache
    pub cached: bool,
    /// Engine that served the request
    pub provider: String,
    /// Artifact size in bytes
    pub size: u64,
}

/// Synthesize speech for a piece of text.
///
/// Always answers with some artifact once the input validates; engine
/// failures degrade to the placeholder provider inside the coordinator.
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn synthesize(
    State(state): State<AppState>,
    Json(request): Json<TtsRequest>,
) -> Result<Json<TtsResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let format = request
        .format
        .as_deref()
        .map(AudioFormat::from_extension);

    let artifact = state
        .speech
        .synthesize(
            &request.text,
            request.voice.as_deref(),
            request.speed.as_deref(),
            format,
        )
        .await?;

    let format = artifact
        .url
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_string();

    Ok(Json(TtsResponse {
        audio_url: artifact.url,
        cache_key: artifact.cache_key,
        format,
        cached: artifact.cached,
        provider: artifact.provider,
        size: artifact.byte_size,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r#"{"text": "hello"}"#;
        let request: TtsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.text, "hello");
        assert!(request.voice.is_none());
        assert!(request.speed.is_none());
        assert!(request.format.is_none());
    }

    #[test]
    fn empty_text_fails_validation() {
        let request = TtsRequest {
            text: String::new(),
            voice: None,
            speed: None,
            format: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn oversized_text_fails_validation() {
        let request = TtsRequest {
            text: "a".repeat(5001),
            voice: None,
            speed: None,
            format: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn max_length_text_passes_validation() {
        let request = TtsRequest {
            text: "a".repeat(5000),
            voice: None,
            speed: None,
            format: None,
        };
        assert!(request.validate().is_ok());
    }
}
