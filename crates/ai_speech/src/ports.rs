//! Port definition for speech engines

use std::path::Path;

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::SynthesisSpec;

/// Port for speech rendering engines
///
/// An engine renders a normalized spec to the destination path. Output
/// validation (minimum size) is the coordinator's job; engines only
/// signal their own failures.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Render the spec's text to an audio file at `dest`
    async fn render(&self, spec: &SynthesisSpec, dest: &Path) -> Result<(), SpeechError>;

    /// Check if the engine is usable
    async fn is_available(&self) -> bool;

    /// Engine name reported in artifacts (e.g. "remote", "local", "dummy")
    fn name(&self) -> &'static str;
}
