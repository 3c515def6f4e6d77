//! Speech synthesis coordinator
//!
//! Orchestrates cache lookup, primary engine invocation, and the dummy
//! fallback. The outward contract is never-fail: once the inputs pass
//! validation, the caller always receives some artifact, preferring a
//! real render and degrading to a minimal placeholder. Audio must not
//! block the product experience.
//!
//! Two concurrent requests for the same key may both miss the cache and
//! render redundantly into the same destination; content is derived
//! identically from the key, so the last writer wins and the race is
//! benign.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::cache::{cache_key, file_size, SpeechCache, MIN_VALID_BYTES};
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechEngine;
use crate::providers::{engine_for, DummyEngine};
use crate::types::{AudioFormat, SpeechArtifact, SpeechSpeed, SynthesisSpec};

/// Coordinates cache, primary engine, and fallback
pub struct SpeechSynthesisCoordinator {
    cache: SpeechCache,
    primary: Arc<dyn SpeechEngine>,
    fallback: DummyEngine,
    config: SpeechConfig,
    default_speed: SpeechSpeed,
}

impl fmt::Debug for SpeechSynthesisCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesisCoordinator")
            .field("primary", &self.primary.name())
            .field("cache_root", &self.cache.root())
            .finish_non_exhaustive()
    }
}

impl SpeechSynthesisCoordinator {
    /// Create a coordinator with the engine selected by the configuration
    pub fn from_config(config: SpeechConfig) -> Result<Self, SpeechError> {
        let primary = engine_for(&config)?;
        Self::with_engine(config, primary)
    }

    /// Create a coordinator around a specific primary engine
    pub fn with_engine(
        config: SpeechConfig,
        primary: Arc<dyn SpeechEngine>,
    ) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;
        let cache = SpeechCache::open(&config.media_root)?;
        let default_speed =
            SpeechSpeed::normalize(Some(&config.default_speed), &SpeechSpeed::neutral());

        info!(
            primary = primary.name(),
            cache_root = %cache.root().display(),
            "Initialized speech synthesis coordinator"
        );

        Ok(Self {
            cache,
            primary,
            fallback: DummyEngine,
            config,
            default_speed,
        })
    }

    /// Synthesize text to an audio artifact.
    ///
    /// Unset voice/speed/format default from the configuration; speed is
    /// normalized to signed-percent form. After validation this method
    /// never fails: engine errors and undersized renders degrade to the
    /// dummy placeholder.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        speed: Option<&str>,
        format: Option<AudioFormat>,
    ) -> Result<SpeechArtifact, SpeechError> {
        let spec = self.normalize(text, voice, speed, format)?;
        let key = cache_key(&spec);
        let path = self.cache.path_for(&spec);
        let url = SpeechCache::url_for(&spec);

        // Cache hit: no engine invoked, the artifact is served as-is.
        if let Some(byte_size) = self.cache.valid_size(&spec) {
            debug!(key = %key, byte_size, "Cache hit");
            return Ok(SpeechArtifact {
                cache_key: key,
                file_path: path,
                url,
                byte_size,
                provider: self.primary.name().to_string(),
                cached: true,
            });
        }

        let provider = match self.render_with_primary(&spec, &path).await {
            Ok(()) => self.primary.name(),
            Err(e) => {
                warn!(error = %e, "Primary engine failed, falling back to placeholder");
                self.fallback.render(&spec, &path).await?;
                self.fallback.name()
            },
        };

        let byte_size = file_size(&path).unwrap_or(0);

        info!(key = %key, provider, byte_size, "Synthesis complete");

        Ok(SpeechArtifact {
            cache_key: key,
            file_path: path,
            url,
            byte_size,
            provider: provider.to_string(),
            cached: false,
        })
    }

    /// Run the primary engine and validate its output size
    async fn render_with_primary(
        &self,
        spec: &SynthesisSpec,
        path: &Path,
    ) -> Result<(), SpeechError> {
        self.primary.render(spec, path).await?;

        let size = file_size(path).unwrap_or(0);
        if size < MIN_VALID_BYTES {
            return Err(SpeechError::UndersizedOutput {
                size,
                min: MIN_VALID_BYTES,
            });
        }
        Ok(())
    }

    /// Validate and normalize the raw inputs into a synthesis spec
    fn normalize(
        &self,
        text: &str,
        voice: Option<&str>,
        speed: Option<&str>,
        format: Option<AudioFormat>,
    ) -> Result<SynthesisSpec, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        let len = text.chars().count();
        if len > self.config.max_text_chars {
            return Err(SpeechError::TextTooLong {
                len,
                max: self.config.max_text_chars,
            });
        }

        Ok(SynthesisSpec {
            text: text.to_string(),
            voice: voice
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(&self.config.default_voice)
                .to_string(),
            speed: SpeechSpeed::normalize(speed, &self.default_speed),
            format: format.unwrap_or(self.config.default_format),
        })
    }

    /// Check if the primary engine is usable
    pub async fn is_available(&self) -> bool {
        self.primary.is_available().await
    }

    /// Name of the primary engine
    #[must_use]
    pub fn primary_engine(&self) -> &'static str {
        self.primary.name()
    }
}
