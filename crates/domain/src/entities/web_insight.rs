//! Web insight snippets produced by the knowledge agent

use serde::{Deserialize, Serialize};

/// One short insight gathered from the web knowledge agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSnippet {
    /// Topic or query the insight answers
    pub title: String,
    /// The insight text itself
    pub snippet: String,
    /// Source URL, when the agent surfaces one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WebSnippet {
    /// Create a snippet without a source URL
    #[must_use]
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: None,
        }
    }

    /// Set the source URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
