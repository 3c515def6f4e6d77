//! AI Speech - Text-to-Speech synthesis for Sattva
//!
//! Renders narration text to audio files with a content-hash cache and a
//! fallback chain that never fails the caller.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` defines the [`SpeechEngine`] trait every renderer implements
//! - `providers` contains the concrete engines (remote HTTP, local CLI,
//!   dummy placeholder)
//! - `coordinator` orchestrates cache lookup, engine invocation, and the
//!   dummy fallback
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{SpeechConfig, SpeechSynthesisCoordinator};
//!
//! let coordinator = SpeechSynthesisCoordinator::from_config(SpeechConfig::default())?;
//! let artifact = coordinator.synthesize("Hello", None, None, None).await?;
//! println!("{} ({} bytes, cached: {})", artifact.url, artifact.byte_size, artifact.cached);
//! ```

pub mod cache;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use cache::{cache_key, SpeechCache, MIN_VALID_BYTES};
pub use config::{EngineSelection, SpeechConfig};
pub use coordinator::SpeechSynthesisCoordinator;
pub use error::SpeechError;
pub use ports::SpeechEngine;
pub use providers::{DummyEngine, LocalCliEngine, RemoteHttpEngine};
pub use types::{AudioFormat, SpeechArtifact, SpeechSpeed, SynthesisSpec};
