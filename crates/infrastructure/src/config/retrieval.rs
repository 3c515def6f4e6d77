//! Similarity index configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the retrieval index service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Base URL of the index service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Collection to query
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_collection() -> String {
    "gita".to_string()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
