//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

use crate::types::AudioFormat;

/// Configuration for the speech subsystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Primary engine to use
    #[serde(default)]
    pub engine: EngineSelection,

    /// Default voice for synthesis
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Default speed in signed-percent form
    #[serde(default = "default_speed")]
    pub default_speed: String,

    /// Default output format
    #[serde(default = "default_format")]
    pub default_format: AudioFormat,

    /// Media root; artifacts are cached under `<media_root>/tts/`
    #[serde(default = "default_media_root")]
    pub media_root: String,

    /// Maximum text length in characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Remote engine settings
    #[serde(default)]
    pub remote: RemoteEngineConfig,

    /// Local engine settings
    #[serde(default)]
    pub local: LocalEngineConfig,
}

/// Primary engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EngineSelection {
    /// Remote HTTP neural engine (default)
    #[default]
    Remote,
    /// Local offline CLI engine
    Local,
    /// Placeholder engine (testing / credential-free setups)
    Dummy,
}

/// Remote HTTP engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteEngineConfig {
    /// Synthesis endpoint base URL
    #[serde(default = "default_remote_endpoint")]
    pub endpoint: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_remote_timeout_ms")]
    pub timeout_ms: u64,
}

/// Local CLI engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalEngineConfig {
    /// Path or name of the synthesis executable
    #[serde(default = "default_local_executable")]
    pub executable: String,

    /// Voices installed for the local engine, matched by substring
    #[serde(default)]
    pub voices: Vec<String>,

    /// Base speaking rate in words per minute
    #[serde(default = "default_base_rate")]
    pub base_rate: u32,
}

fn default_voice() -> String {
    "en-US-AriaNeural".to_string()
}

fn default_speed() -> String {
    "+0%".to_string()
}

const fn default_format() -> AudioFormat {
    AudioFormat::Mp3
}

fn default_media_root() -> String {
    "./static".to_string()
}

const fn default_max_text_chars() -> usize {
    5000
}

fn default_remote_endpoint() -> String {
    "http://localhost:5002".to_string()
}

const fn default_remote_timeout_ms() -> u64 {
    30_000
}

fn default_local_executable() -> String {
    "espeak-ng".to_string()
}

const fn default_base_rate() -> u32 {
    200
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            engine: EngineSelection::default(),
            default_voice: default_voice(),
            default_speed: default_speed(),
            default_format: default_format(),
            media_root: default_media_root(),
            max_text_chars: default_max_text_chars(),
            remote: RemoteEngineConfig::default(),
            local: LocalEngineConfig::default(),
        }
    }
}

impl Default for RemoteEngineConfig {
    fn default() -> Self {
        Self {
            endpoint: default_remote_endpoint(),
            timeout_ms: default_remote_timeout_ms(),
        }
    }
}

impl Default for LocalEngineConfig {
    fn default() -> Self {
        Self {
            executable: default_local_executable(),
            voices: Vec::new(),
            base_rate: default_base_rate(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_chars == 0 {
            return Err("max_text_chars must be greater than 0".to_string());
        }
        if self.remote.timeout_ms == 0 {
            return Err("remote timeout must be greater than 0".to_string());
        }
        if self.local.base_rate == 0 {
            return Err("local base_rate must be greater than 0".to_string());
        }
        Ok(())
    }
}
