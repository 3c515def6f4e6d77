//! Dummy placeholder engine
//!
//! Always succeeds by writing a minimal fixed payload. Exists solely to
//! uphold the coordinator's never-fail contract; the output is not meant
//! for real playback.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::error::SpeechError;
use crate::ports::SpeechEngine;
use crate::types::SynthesisSpec;

/// Minimal ID3 header stub written as the placeholder payload
const PLACEHOLDER_BYTES: [u8; 10] = [0x49, 0x44, 0x33, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x21];

/// Always-succeeding placeholder engine
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyEngine;

#[async_trait]
impl SpeechEngine for DummyEngine {
    async fn render(&self, _spec: &SynthesisSpec, dest: &Path) -> Result<(), SpeechError> {
        // Written once per destination; an existing placeholder is kept.
        if tokio::fs::try_exists(dest).await.unwrap_or(false) {
            debug!(dest = %dest.display(), "Placeholder already present");
            return Ok(());
        }
        tokio::fs::write(dest, PLACEHOLDER_BYTES).await?;
        Ok(())
    }

    async fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "dummy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AudioFormat, SpeechSpeed};

    fn spec() -> SynthesisSpec {
        SynthesisSpec {
            text: "hello".to_string(),
            voice: "aria".to_string(),
            speed: SpeechSpeed::neutral(),
            format: AudioFormat::Mp3,
        }
    }

    #[tokio::test]
    async fn writes_the_placeholder_payload() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp3");

        DummyEngine.render(&spec(), &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), PLACEHOLDER_BYTES);
    }

    #[tokio::test]
    async fn keeps_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp3");
        std::fs::write(&dest, b"already here").unwrap();

        DummyEngine.render(&spec(), &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"already here");
    }

    #[tokio::test]
    async fn is_always_available() {
        assert!(DummyEngine.is_available().await);
    }

    #[test]
    fn placeholder_is_below_the_validity_threshold() {
        // The placeholder must never be mistaken for a real render.
        assert!((PLACEHOLDER_BYTES.len() as u64) < crate::cache::MIN_VALID_BYTES);
    }
}
