//! Infrastructure layer for Sattva
//!
//! Wires the application ports to their concrete collaborators:
//! - `adapters` - retrieval index, text generator, and knowledge agent
//! - `config` - the aggregated application configuration
//! - `telemetry` - tracing initialization

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{GenerationAdapter, KnowledgeAdapter, RetrievalAdapter};
pub use config::{AppConfig, RetrievalConfig, ServerConfig};
