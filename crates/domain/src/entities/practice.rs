//! Practice suggestions

use serde::{Deserialize, Serialize};

/// A short guided practice offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeItem {
    /// Practice name
    pub title: String,
    /// Why this practice helps
    pub why: String,
    /// Tradition the practice is rooted in
    pub roots: String,
    /// Ordered steps
    pub steps: Vec<String>,
}

impl PracticeItem {
    /// Create a new practice item
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        why: impl Into<String>,
        roots: impl Into<String>,
        steps: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            why: why.into(),
            roots: roots.into(),
            steps,
        }
    }
}
