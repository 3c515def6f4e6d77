//! Configuration for the web knowledge agent

use serde::{Deserialize, Serialize};

/// Configuration for the insight agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchConfig {
    /// Base URL of the search-capable chat completions server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; without one the agent runs purely on static fallbacks
    #[serde(default)]
    pub api_key: Option<String>,

    /// Search-capable model to query
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum insight lines extracted per query
    #[serde(default = "default_max_insights")]
    pub max_insights: usize,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "perplexity/sonar".to_string()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_max_insights() -> usize {
    5
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_insights: default_max_insights(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = WebSearchConfig::default();
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "perplexity/sonar");
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.max_insights, 5);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: WebSearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_insights, 5);
    }
}
