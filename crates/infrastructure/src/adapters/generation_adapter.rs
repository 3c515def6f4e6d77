//! Generation adapter - Implements GenerationPort via ai_core

use std::time::Instant;

use ai_core::{GenerationError, TextGenerator};
use application::error::ApplicationError;
use application::ports::{GenerationPort, GenerationResult};
use async_trait::async_trait;
use tracing::instrument;

/// Adapter wrapping a [`TextGenerator`] engine
pub struct GenerationAdapter<G> {
    engine: G,
}

impl<G: std::fmt::Debug> std::fmt::Debug for GenerationAdapter<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationAdapter")
            .field("engine", &self.engine)
            .finish()
    }
}

impl<G: TextGenerator> GenerationAdapter<G> {
    /// Create a new adapter around an engine
    pub const fn new(engine: G) -> Self {
        Self { engine }
    }

    /// Map an engine error to an application error
    fn map_error(err: GenerationError) -> ApplicationError {
        match err {
            GenerationError::ConnectionFailed(e) | GenerationError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            GenerationError::Configuration(e) => ApplicationError::Configuration(e),
            GenerationError::ServerError(_)
            | GenerationError::InvalidResponse(_)
            | GenerationError::Timeout(_) => ApplicationError::Generation(err.to_string()),
        }
    }
}

#[async_trait]
impl<G: TextGenerator> GenerationPort for GenerationAdapter<G> {
    #[instrument(skip(self, system_prompt, user_prompt), fields(user_len = user_prompt.len()))]
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GenerationResult, ApplicationError> {
        let start = Instant::now();
        let generation = self
            .engine
            .generate(system_prompt, user_prompt)
            .await
            .map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        Ok(GenerationResult {
            content: generation.content,
            model: generation.model,
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await
    }

    fn current_model(&self) -> &str {
        self.engine.default_model()
    }
}
