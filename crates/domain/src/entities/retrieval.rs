//! Retrieval hits from the scripture similarity index

use serde::{Deserialize, Serialize};

use super::story::Citation;

/// Passage metadata carried alongside a retrieved document
///
/// All fields are optional; the index is not required to annotate every
/// passage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageMetadata {
    /// Work the passage belongs to
    #[serde(default)]
    pub work: Option<String>,
    /// Chapter within the work
    #[serde(default)]
    pub chapter: Option<String>,
    /// Verse within the chapter
    #[serde(default)]
    pub verse: Option<String>,
}

impl PassageMetadata {
    /// Derive a citation from this metadata.
    ///
    /// The work defaults to "Bhagavad Gita" when unannotated; the
    /// chapter.verse reference is attached only when both parts are known.
    #[must_use]
    pub fn citation(&self) -> Citation {
        let work = self
            .work
            .clone()
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| "Bhagavad Gita".to_string());
        let mut citation = Citation::new(work);
        if let (Some(chapter), Some(verse)) = (&self.chapter, &self.verse) {
            if !chapter.is_empty() && !verse.is_empty() {
                citation = citation.with_reference(format!("{chapter}.{verse}"));
            }
        }
        citation
    }

    /// Short "work chapter.verse" label used in generation context blocks
    #[must_use]
    pub fn label(&self) -> String {
        let work = self.work.as_deref().unwrap_or_default();
        let chapter = self.chapter.as_deref().unwrap_or_default();
        let verse = self.verse.as_deref().unwrap_or_default();
        format!("{work} {chapter}.{verse}").trim().to_string()
    }
}

/// One scored hit from the similarity index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalHit {
    /// Passage text
    pub document: String,
    /// Passage annotations
    #[serde(default)]
    pub metadata: PassageMetadata,
    /// Cosine similarity in [0, 1], as reported by the index
    pub similarity: f32,
}

impl RetrievalHit {
    /// Create a new hit
    #[must_use]
    pub fn new(document: impl Into<String>, metadata: PassageMetadata, similarity: f32) -> Self {
        Self {
            document: document.into(),
            metadata,
            similarity,
        }
    }
}
