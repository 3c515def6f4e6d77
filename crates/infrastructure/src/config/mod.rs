//! Application configuration
//!
//! One `AppConfig` aggregates the per-subsystem configs, built once at
//! startup from an optional `config` file plus `SATTVA__`-prefixed
//! environment overrides, and passed by reference into each component.

mod retrieval;
mod server;

use ai_core::GenerationConfig;
use ai_speech::SpeechConfig;
use integration_websearch::WebSearchConfig;
use serde::{Deserialize, Serialize};

pub use retrieval::RetrievalConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Similarity index settings
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Text generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Web knowledge agent settings
    #[serde(default)]
    pub websearch: WebSearchConfig,

    /// Speech synthesis settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment
    /// variables (e.g. `SATTVA__SERVER__PORT=8080`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SATTVA")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
