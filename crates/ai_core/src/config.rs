//! Configuration for the text generation engine

use serde::{Deserialize, Serialize};

/// Configuration for the generation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the chat completions server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; when absent the engine runs in offline template mode
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Temperature for sampling
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "openai/gpt-4o-mini".to_string()
}

const fn default_timeout_ms() -> u64 {
    60_000
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            temperature: default_temperature(),
        }
    }
}

impl GenerationConfig {
    /// Whether the engine should run in offline template mode
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.api_key.is_none()
    }
}
