//! Content-hash artifact cache
//!
//! Artifacts live under `<media_root>/tts/` named `<24-hex>.<format>`.
//! The key is derived from `voice|speed|text` (order-sensitive,
//! pipe-delimited, UTF-8), so identical normalized inputs always map to
//! the same file. The cache is unbounded and never invalidated except by
//! external deletion.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SpeechError;
use crate::types::SynthesisSpec;

/// Minimum size for an artifact to count as valid; anything smaller is
/// treated as a truncated or corrupt render.
pub const MIN_VALID_BYTES: u64 = 4096;

/// Length of the hex-encoded cache key
const KEY_HEX_CHARS: usize = 24;

/// Subdirectory of the media root holding cached artifacts
const TTS_DIR: &str = "tts";

/// Derive the deterministic cache key for a synthesis spec
#[must_use]
pub fn cache_key(spec: &SynthesisSpec) -> String {
    let input = format!("{}|{}|{}", spec.voice, spec.speed, spec.text);
    let hash = blake3::hash(input.as_bytes());
    hash.to_hex()[..KEY_HEX_CHARS].to_string()
}

/// File-backed artifact cache
#[derive(Debug, Clone)]
pub struct SpeechCache {
    root: PathBuf,
}

impl SpeechCache {
    /// Open the cache under a media root, creating the `tts/` directory.
    pub fn open(media_root: impl Into<PathBuf>) -> Result<Self, SpeechError> {
        let root = media_root.into().join(TTS_DIR);
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Artifact filename for a spec
    #[must_use]
    pub fn artifact_name(spec: &SynthesisSpec) -> String {
        format!("{}.{}", cache_key(spec), spec.format.extension())
    }

    /// On-disk path for a spec's artifact
    #[must_use]
    pub fn path_for(&self, spec: &SynthesisSpec) -> PathBuf {
        self.root.join(Self::artifact_name(spec))
    }

    /// Serving URL for a spec's artifact
    #[must_use]
    pub fn url_for(spec: &SynthesisSpec) -> String {
        format!("/static/{TTS_DIR}/{}", Self::artifact_name(spec))
    }

    /// Size of a valid cached artifact, or `None` when the file is
    /// missing or below [`MIN_VALID_BYTES`].
    #[must_use]
    pub fn valid_size(&self, spec: &SynthesisSpec) -> Option<u64> {
        let size = file_size(&self.path_for(spec))?;
        if size >= MIN_VALID_BYTES {
            Some(size)
        } else {
            debug!(size, "Cached artifact below minimum, ignoring");
            None
        }
    }

    /// Cache root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Size of a file, or `None` if it does not exist
#[must_use]
pub(crate) fn file_size(path: &Path) -> Option<u64> {
    std::fs::metadata(path).ok().map(|m| m.len())
}
