//! Types for speech synthesis
//!
//! Normalized synthesis inputs, the speed value type, and the cached
//! artifact description.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Supported output audio formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 format (default remote output)
    Mp3,
    /// WAV format (uncompressed, local engine output)
    Wav,
    /// OGG container
    Ogg,
}

impl AudioFormat {
    /// Get the file extension for this audio format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Ogg => "ogg",
        }
    }

    /// Get the MIME type for this audio format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Ogg => "audio/ogg",
        }
    }

    /// Parse a format from its extension, defaulting unknown inputs to MP3
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "wav" => Self::Wav,
            "ogg" => Self::Ogg,
            _ => Self::Mp3,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Speech speed in normalized signed-percent form (`+N%` / `-N%`)
///
/// Normalization is lenient: a bare number gains `+` and `%`, an existing
/// signed-percent string passes through, and anything unparsable falls
/// back to the supplied default. No range clamping happens here; engines
/// clamp to their own limits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeechSpeed(String);

impl SpeechSpeed {
    /// The neutral speed
    #[must_use]
    pub fn neutral() -> Self {
        Self("+0%".to_string())
    }

    /// Normalize a raw speed string, falling back to `default` when the
    /// input cannot be shaped into `+N%` / `-N%` form.
    #[must_use]
    pub fn normalize(raw: Option<&str>, default: &Self) -> Self {
        let Some(raw) = raw else {
            return default.clone();
        };
        let mut s = raw.trim().to_string();
        if s.is_empty() {
            return default.clone();
        }
        if !s.ends_with('%') {
            s.push('%');
        }
        if !s.starts_with('+') && !s.starts_with('-') {
            s.insert(0, '+');
        }
        if Self::is_valid(&s) {
            Self(s)
        } else {
            default.clone()
        }
    }

    /// Check `+N%` / `-N%` shape
    fn is_valid(s: &str) -> bool {
        let Some(rest) = s.strip_suffix('%') else {
            return false;
        };
        let Some(digits) = rest.strip_prefix('+').or_else(|| rest.strip_prefix('-')) else {
            return false;
        };
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    }

    /// The normalized string form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Signed percent value (e.g. `-5` for `"-5%"`)
    #[must_use]
    pub fn percent(&self) -> i32 {
        self.0.trim_end_matches('%').parse().unwrap_or(0)
    }
}

impl Default for SpeechSpeed {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for SpeechSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fully normalized synthesis inputs
///
/// Everything the cache key is derived from; engines receive this spec
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisSpec {
    /// Text to render
    pub text: String,
    /// Voice identifier
    pub voice: String,
    /// Normalized speed
    pub speed: SpeechSpeed,
    /// Output format
    pub format: AudioFormat,
}

/// A synthesized (or cached) audio artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechArtifact {
    /// Deterministic cache key derived from the synthesis inputs
    pub cache_key: String,
    /// Path of the artifact file on disk
    pub file_path: PathBuf,
    /// URL the artifact is served under
    pub url: String,
    /// Size of the artifact in bytes
    pub byte_size: u64,
    /// Engine that ultimately served the request
    pub provider: String,
    /// Whether the artifact came from the cache
    pub cached: bool,
}
