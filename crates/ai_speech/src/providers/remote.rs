//! Remote HTTP speech engine
//!
//! Delegates rendering to a neural synthesis service over HTTP. The
//! normalized `+N%` / `-N%` speed string maps directly to the service's
//! `rate` parameter. Transport failures, non-success statuses, and empty
//! bodies are all engine errors; the coordinator decides what happens
//! next.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::RemoteEngineConfig;
use crate::error::SpeechError;
use crate::ports::SpeechEngine;
use crate::types::SynthesisSpec;

/// Remote neural synthesis engine
#[derive(Debug, Clone)]
pub struct RemoteHttpEngine {
    client: Client,
    config: RemoteEngineConfig,
}

/// Synthesis request body
#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
    voice: &'a str,
    rate: &'a str,
    format: &'a str,
}

impl RemoteHttpEngine {
    /// Create a new remote engine
    pub fn new(config: RemoteEngineConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the synthesis endpoint URL
    fn synthesize_url(&self) -> String {
        format!("{}/api/synthesize", self.config.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechEngine for RemoteHttpEngine {
    #[instrument(skip(self, spec, dest), fields(text_len = spec.text.len(), voice = %spec.voice))]
    async fn render(&self, spec: &SynthesisSpec, dest: &Path) -> Result<(), SpeechError> {
        let request = RenderRequest {
            text: &spec.text,
            voice: &spec.voice,
            rate: spec.speed.as_str(),
            format: spec.format.extension(),
        };

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Remote synthesis failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "Status {status}: {body}"
            )));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Remote engine returned an empty body".to_string(),
            ));
        }

        tokio::fs::write(dest, &audio).await?;
        debug!(bytes = audio.len(), "Remote synthesis written");

        Ok(())
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.config.endpoint.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(5))
            .send()
            .await;
        matches!(response, Ok(resp) if resp.status().is_success())
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AudioFormat, SpeechSpeed};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn spec(speed: &str) -> SynthesisSpec {
        SynthesisSpec {
            text: "hello there".to_string(),
            voice: "en-US-AriaNeural".to_string(),
            speed: SpeechSpeed::normalize(Some(speed), &SpeechSpeed::neutral()),
            format: AudioFormat::Mp3,
        }
    }

    async fn engine_for(server: &MockServer) -> RemoteHttpEngine {
        RemoteHttpEngine::new(RemoteEngineConfig {
            endpoint: server.uri(),
            timeout_ms: 5_000,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn render_writes_the_response_body() {
        let server = MockServer::start().await;
        let audio = vec![0xAAu8; 8192];

        Mock::given(method("POST"))
            .and(path("/api/synthesize"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp3");

        engine_for(&server).await.render(&spec("+0%"), &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), audio);
    }

    #[tokio::test]
    async fn render_sends_the_normalized_rate() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/synthesize"))
            .and(body_partial_json(serde_json::json!({
                "rate": "-5%",
                "voice": "en-US-AriaNeural",
                "format": "mp3"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8; 100]))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp3");

        engine_for(&server).await.render(&spec("-5%"), &dest).await.unwrap();
    }

    #[tokio::test]
    async fn server_error_is_a_synthesis_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/synthesize"))
            .respond_with(ResponseTemplate::new(500).set_body_string("engine crashed"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp3");

        let err = engine_for(&server).await.render(&spec("+0%"), &dest).await.unwrap_err();
        assert!(matches!(err, SpeechError::SynthesisFailed(_)));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn empty_body_is_a_synthesis_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/synthesize"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp3");

        let err = engine_for(&server).await.render(&spec("+0%"), &dest).await.unwrap_err();
        assert!(matches!(err, SpeechError::SynthesisFailed(_)));
    }

    #[tokio::test]
    async fn availability_follows_the_health_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(engine_for(&server).await.is_available().await);
    }
}
