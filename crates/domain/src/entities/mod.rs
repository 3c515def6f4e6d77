//! Domain entities
//!
//! Core data structures for evidence planning, retrieval, web insights,
//! story composition, and practice suggestions.

mod plan;
mod practice;
mod retrieval;
mod story;
mod web_insight;

pub use plan::{EvidenceSource, Persona, Plan};
pub use practice::PracticeItem;
pub use retrieval::{PassageMetadata, RetrievalHit};
pub use story::{Citation, Slide, StoryPayload, MAX_TAKEAWAYS};
pub use web_insight::WebSnippet;
