//! Knowledge adapter - Implements KnowledgePort via the insight agent

use application::ports::KnowledgePort;
use async_trait::async_trait;
use integration_websearch::InsightAgent;

/// Adapter wrapping the web insight agent
#[derive(Debug, Clone)]
pub struct KnowledgeAdapter {
    agent: InsightAgent,
}

impl KnowledgeAdapter {
    /// Create a new adapter around an agent
    #[must_use]
    pub const fn new(agent: InsightAgent) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl KnowledgePort for KnowledgeAdapter {
    async fn insights(&self, query: &str) -> Vec<String> {
        // The agent degrades internally; nothing to map here.
        self.agent.insights(query).await
    }

    async fn is_available(&self) -> bool {
        self.agent.is_configured()
    }

    fn provider_name(&self) -> &str {
        self.agent.provider_name()
    }
}
