//! Generation port - Interface for the black-box text generator

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a generation call
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Generated text
    pub content: String,
    /// Model that produced it
    pub model: String,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for narration generation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Generate text for a system + user prompt pair
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GenerationResult, ApplicationError>;

    /// Check if the generator backend is healthy
    async fn is_healthy(&self) -> bool;

    /// Get the name of the current model
    fn current_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GenerationPort>();
    }

    #[tokio::test]
    async fn mock_generates_content() {
        let mut mock = MockGenerationPort::new();
        mock.expect_generate().returning(|_, _| {
            Ok(GenerationResult {
                content: "A calm story.".to_string(),
                model: "test-model".to_string(),
                latency_ms: 12,
            })
        });

        let result = mock.generate("system", "user").await.unwrap();
        assert_eq!(result.content, "A calm story.");
    }
}
