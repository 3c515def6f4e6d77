//! AI Core - text generation for Sattva
//!
//! Talks to any OpenAI-compatible chat completions server (OpenRouter,
//! vLLM, llama.cpp server, ...) through the [`TextGenerator`] port.
//!
//! Without an API key the engine runs in offline mode and returns a
//! deterministic templated narration instead of calling out, so demo
//! setups work with no credentials at all.

pub mod config;
pub mod engine;
pub mod error;
pub mod ports;

pub use config::GenerationConfig;
pub use engine::ChatCompletionsEngine;
pub use error::GenerationError;
pub use ports::{Generation, TextGenerator};
