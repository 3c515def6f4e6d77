//! Evidence plans and personas
//!
//! A [`Plan`] records which evidence sources a pipeline run should consult
//! and which guide persona narrates the result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An evidence source the pipeline can draw on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    /// Similarity search over the scripture index
    Retrieval,
    /// Black-box text generation
    Generation,
    /// Web knowledge agent
    WebSearch,
}

impl fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retrieval => write!(f, "retrieval"),
            Self::Generation => write!(f, "generation"),
            Self::WebSearch => write!(f, "web_search"),
        }
    }
}

/// Guide persona that frames the narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Karma-yoga teacher (Bhagavad Gita)
    Krishna,
    /// Rational inquiry (Krishnamurti)
    Jiddu,
    /// Breath and stillness (Yoga Sutra)
    Patanjali,
    /// Generic fallback guide
    #[default]
    Omniphilosopher,
}

impl Persona {
    /// Stable identifier used in API payloads and rule tables
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Krishna => "krishna",
            Self::Jiddu => "jiddu",
            Self::Patanjali => "patanjali",
            Self::Omniphilosopher => "omniphilosopher",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evidence plan for one pipeline run
///
/// Invariant: `sources` is non-empty. Constructors uphold this by always
/// including at least retrieval and generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Sources to consult, in planning order
    pub sources: Vec<EvidenceSource>,
    /// Persona resolved for this run
    pub persona: Persona,
    /// Scripture the persona is rooted in, when a rule names one
    pub work_hint: Option<String>,
}

impl Plan {
    /// Standard plan: retrieval first, generation as gap filler.
    /// Web search is reserved and not part of the default source set.
    #[must_use]
    pub fn standard(persona: Persona, work_hint: Option<String>) -> Self {
        Self {
            sources: vec![EvidenceSource::Retrieval, EvidenceSource::Generation],
            persona,
            work_hint,
        }
    }

    /// Check whether a source is part of this plan
    #[must_use]
    pub fn includes(&self, source: EvidenceSource) -> bool {
        self.sources.contains(&source)
    }
}
