//! Local offline CLI speech engine
//!
//! Drives an espeak-ng style command-line synthesizer. Voice selection is
//! best-effort substring matching over the configured voice list; the
//! normalized percentage speed is mapped to an absolute engine rate by
//! perturbing the configured base rate. Output is always an uncompressed
//! WAV container regardless of the requested extension, which is the
//! engine's only native format.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use crate::config::LocalEngineConfig;
use crate::error::SpeechError;
use crate::ports::SpeechEngine;
use crate::types::{SpeechSpeed, SynthesisSpec};

/// Engine rate bounds in words per minute
const MIN_RATE: u32 = 80;
const MAX_RATE: u32 = 300;

/// Offline CLI synthesis engine
#[derive(Debug, Clone)]
pub struct LocalCliEngine {
    config: LocalEngineConfig,
}

impl LocalCliEngine {
    /// Create a new local engine
    #[must_use]
    pub fn new(config: LocalEngineConfig) -> Self {
        Self { config }
    }

    /// Pick an installed voice for the requested one.
    ///
    /// Exact substring match first, then a 2-letter language-code match,
    /// then the engine default (no `-v` flag).
    fn select_voice(&self, requested: &str) -> Option<String> {
        let target = requested.trim().to_lowercase();
        if target.is_empty() {
            return None;
        }

        if let Some(voice) = self
            .config
            .voices
            .iter()
            .find(|voice| voice.to_lowercase().contains(&target))
        {
            return Some(voice.clone());
        }

        let lang = language_code(&target)?;
        self.config
            .voices
            .iter()
            .find(|voice| voice.to_lowercase().contains(&lang))
            .cloned()
    }

    /// Map a percentage speed to an absolute engine rate around the base
    /// rate, clamped to the engine's supported range.
    fn rate_for(&self, speed: &SpeechSpeed) -> u32 {
        let base = f64::from(self.config.base_rate);
        let factor = 1.0 + f64::from(speed.percent()) / 100.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rate = (base * factor).max(0.0) as u32;
        rate.clamp(MIN_RATE, MAX_RATE)
    }
}

/// First 2-letter ASCII alphabetic run in the target (e.g. "en" from
/// "en-US-AriaNeural")
fn language_code(target: &str) -> Option<String> {
    let mut run = String::new();
    for c in target.chars() {
        if c.is_ascii_alphabetic() {
            run.push(c);
            if run.len() == 2 {
                return Some(run);
            }
        } else {
            run.clear();
        }
    }
    None
}

#[async_trait]
impl SpeechEngine for LocalCliEngine {
    #[instrument(skip(self, spec, dest), fields(text_len = spec.text.len(), voice = %spec.voice))]
    async fn render(&self, spec: &SynthesisSpec, dest: &Path) -> Result<(), SpeechError> {
        let mut cmd = Command::new(&self.config.executable);

        if let Some(voice) = self.select_voice(&spec.voice) {
            cmd.arg("-v").arg(voice);
        }

        let rate = self.rate_for(&spec.speed);
        cmd.arg("-s")
            .arg(rate.to_string())
            .arg("-w")
            .arg(dest)
            .arg(&spec.text)
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        debug!(rate, "Running local synthesis engine");

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpeechError::NotAvailable(format!(
                    "Synthesis executable not found: '{}'",
                    self.config.executable
                ))
            } else {
                SpeechError::SynthesisFailed(format!("Failed to run engine: {e}"))
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Local engine failed: {}", stderr.trim());
            return Err(SpeechError::SynthesisFailed(format!(
                "Engine exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.config.executable)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
