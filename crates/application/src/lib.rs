//! Application layer for Sattva
//!
//! Orchestrates the guidance pipeline over ports implemented by the
//! infrastructure layer:
//! - `ports` - interfaces for retrieval, generation, and web knowledge
//! - `services` - evidence planner, story pipeline, composer, practices

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    Adequacy, EvidencePlanner, PracticeService, StoryComposer, StoryOutcome, StoryPipeline,
};
