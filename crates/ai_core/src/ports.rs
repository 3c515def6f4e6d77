//! Port definition for text generation engines

use async_trait::async_trait;

use crate::error::GenerationError;

/// Result of one generation call
#[derive(Debug, Clone)]
pub struct Generation {
    /// Generated text
    pub content: String,
    /// Model that produced it
    pub model: String,
}

/// Port for text generation engines
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a system + user prompt pair
    async fn generate(&self, system: &str, user: &str) -> Result<Generation, GenerationError>;

    /// Check if the generation backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the configured model name
    fn default_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, _system: &str, user: &str) -> Result<Generation, GenerationError> {
            Ok(Generation {
                content: user.to_string(),
                model: "echo".to_string(),
            })
        }

        async fn health_check(&self) -> bool {
            true
        }

        fn default_model(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn echo_generator_round_trips() {
        let generator = EchoGenerator;
        let generation = generator.generate("sys", "hello").await.unwrap();
        assert_eq!(generation.content, "hello");
        assert_eq!(generation.model, "echo");
    }

    #[test]
    fn trait_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TextGenerator>();
    }
}
