//! Insight agent client
//!
//! Asks a search-capable chat model for 3-5 crisp insight bullets on a
//! query. The public surface never fails; every internal error path
//! resolves to a static fallback list keyed to the query.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::bullets::to_bullets;
use crate::config::WebSearchConfig;
use crate::error::WebSearchError;

/// LLM-backed web insight agent
#[derive(Debug, Clone)]
pub struct InsightAgent {
    client: Client,
    config: WebSearchConfig,
}

/// Chat request in OpenAI wire format
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl InsightAgent {
    /// Create a new agent
    pub fn new(config: WebSearchConfig) -> Result<Self, WebSearchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| WebSearchError::ConnectionFailed(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Gather short insight lines for a query.
    ///
    /// Never fails: missing credentials, transport errors, and empty
    /// model answers all degrade to static fallback lines.
    #[instrument(skip(self), fields(query_len = query.len()))]
    pub async fn insights(&self, query: &str) -> Vec<String> {
        if self.config.api_key.is_none() {
            debug!("No API key configured, serving offline fallback insights");
            return offline_fallback(query);
        }

        match self.search(query).await {
            Ok(bullets) if !bullets.is_empty() => bullets,
            Ok(_) => {
                debug!("Model returned nothing usable, serving guard fallback");
                guard_fallback(query)
            },
            Err(e) => {
                warn!(error = %e, "Insight search failed, serving soft-fail fallback");
                soft_fail_fallback(query)
            },
        }
    }

    /// One remote insight query
    async fn search(&self, query: &str) -> Result<Vec<String>, WebSearchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WebSearchError::MissingApiKey)?;

        let prompt = format!(
            "You are a concise research assistant.\n\
             Task: Search the web for this user need and extract 3-5 crisp bullet insights:\n\n\
             QUERY: {query}\n\n\
             Return only short bullets (no URLs), simple English, helpful and neutral."
        );

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.2,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WebSearchError::ServiceError(response.status().to_string()));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| WebSearchError::ParseError(e.to_string()))?;

        let text = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(to_bullets(&text, self.config.max_insights))
    }

    /// Whether the agent has credentials to reach its backing model
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Name of the backing provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        "openrouter"
    }
}

/// Fallback when no API key is configured
fn offline_fallback(query: &str) -> Vec<String> {
    vec![
        format!("Quick note about: {query}"),
        "People often find calm by taking one small, kind action.".to_string(),
        "Slow, even breathing reduces anxious loops.".to_string(),
    ]
}

/// Fallback when the model answered but nothing usable was extracted
fn guard_fallback(query: &str) -> Vec<String> {
    vec![
        format!("Perspective on: {query}"),
        "Act on one tiny, controllable step.".to_string(),
        "Detach a little from the outcome to reduce pressure.".to_string(),
    ]
}

/// Fallback for any transport or service failure
fn soft_fail_fallback(query: &str) -> Vec<String> {
    vec![
        format!("General insight about: {query}"),
        "Name the worry, then do one 5-minute task.".to_string(),
        "Breathe slowly (4-4-4-4) to settle the body.".to_string(),
    ]
}
