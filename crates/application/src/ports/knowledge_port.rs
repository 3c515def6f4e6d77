//! Knowledge port - Interface for the web knowledge agent
//!
//! The agent's contract is soft-fail: implementations substitute static
//! fallback lines for any internal failure instead of raising, so the
//! pipeline's search stage never aborts a run.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Port for best-effort web insight gathering
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KnowledgePort: Send + Sync {
    /// Gather short insight lines for a query.
    ///
    /// Never fails: implementations degrade to generic fallback lines.
    async fn insights(&self, query: &str) -> Vec<String>;

    /// Check if the backing knowledge source is reachable
    async fn is_available(&self) -> bool;

    /// Name of the backing provider
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn KnowledgePort>();
    }

    #[tokio::test]
    async fn mock_returns_insight_lines() {
        let mut mock = MockKnowledgePort::new();
        mock.expect_insights()
            .returning(|_| vec!["Act on one tiny step.".to_string()]);

        let lines = mock.insights("worry").await;
        assert_eq!(lines.len(), 1);
    }
}
