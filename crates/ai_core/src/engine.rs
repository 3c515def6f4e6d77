//! Chat completions engine
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. Without an
//! API key the engine degrades to a deterministic offline template so the
//! pipeline keeps producing narrations with no credentials configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::ports::{Generation, TextGenerator};

/// Narration returned in offline mode, takeaway block included so the
/// composer's extraction path behaves the same with or without a key.
const OFFLINE_TEMPLATE: &str = "You feel heavy because you hold the result too tight. \
Take one small, kind action. Let the future be light. 💙\n\n\
Takeaways:\n- Do one tiny step today. 🌱\n- Breathe slow before you act.\n- Let results be light.";

/// Model name reported for offline generations
const OFFLINE_MODEL: &str = "offline-template";

/// Engine for OpenAI-compatible chat completions servers
#[derive(Debug, Clone)]
pub struct ChatCompletionsEngine {
    client: Client,
    config: GenerationConfig,
}

impl ChatCompletionsEngine {
    /// Create a new engine
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            offline = config.is_offline(),
            "Initialized chat completions engine"
        );

        Ok(Self { client, config })
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

/// Chat request in OpenAI wire format
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat response in OpenAI wire format
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl TextGenerator for ChatCompletionsEngine {
    #[instrument(skip(self, system, user), fields(user_len = user.len()))]
    async fn generate(&self, system: &str, user: &str) -> Result<Generation, GenerationError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("No API key configured, returning offline template");
            return Ok(Generation {
                content: OFFLINE_TEMPLATE.to_string(),
                model: OFFLINE_MODEL.to_string(),
            });
        };

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Generation request failed");
            return Err(GenerationError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("empty choices".to_string()))?;

        debug!(content_len = content.len(), "Generation completed");

        Ok(Generation {
            content,
            model: chat.model.unwrap_or_else(|| self.config.model.clone()),
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> bool {
        if self.config.is_offline() {
            // Offline mode always "works".
            return true;
        }

        let response = self
            .client
            .get(format!("{}/models", self.config.base_url.trim_end_matches('/')))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        matches!(response, Ok(resp) if resp.status().is_success())
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }
}
