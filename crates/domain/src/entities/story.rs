//! Story payload entities
//!
//! The composed output of a pipeline run: a titled slide deck with
//! narration, takeaways, and citations.

use serde::{Deserialize, Serialize};

/// Maximum number of takeaways carried by a story payload
pub const MAX_TAKEAWAYS: usize = 3;

/// A source reference backing a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Cited work (e.g. "Bhagavad Gita")
    pub work: String,
    /// Chapter.verse reference, when known (e.g. "2.47")
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Citation {
    /// Create a citation for a work without a verse reference
    #[must_use]
    pub fn new(work: impl Into<String>) -> Self {
        Self {
            work: work.into(),
            reference: None,
        }
    }

    /// Set the chapter.verse reference
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// The fixed default citation substituted when no grounded citation
    /// exists, so the payload never looks unsourced.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new("Bhagavad Gita").with_reference("2.47")
    }

    /// Whether this citation came from an actual retrieval hit rather
    /// than the hardcoded default
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        *self != Self::fallback()
    }
}

/// One visual slide in the story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Asset URL of the slide image
    pub image_url: String,
    /// Short caption shown under the image
    pub caption: String,
}

impl Slide {
    /// Create a new slide
    #[must_use]
    pub fn new(image_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            caption: caption.into(),
        }
    }
}

/// Final composed story returned to the client
///
/// Invariants: `takeaways` holds at most [`MAX_TAKEAWAYS`] entries,
/// `citations` is never empty, and `narration_text` is never empty (the
/// composer substitutes a templated narration when generation yields
/// nothing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryPayload {
    /// Story title
    pub title: String,
    /// Slides shown while the narration plays
    pub slides: Vec<Slide>,
    /// Narration text
    pub narration_text: String,
    /// Up to three takeaway lines
    pub takeaways: Vec<String>,
    /// At least one citation (grounded or the fixed default)
    pub citations: Vec<Citation>,
    /// Synthesized narration audio, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Background music track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_music_url: Option<String>,
}

impl StoryPayload {
    /// Create a payload, truncating takeaways to [`MAX_TAKEAWAYS`] and
    /// substituting the fallback citation when none is supplied.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        slides: Vec<Slide>,
        narration_text: impl Into<String>,
        mut takeaways: Vec<String>,
        citations: Vec<Citation>,
    ) -> Self {
        takeaways.truncate(MAX_TAKEAWAYS);
        let citations = if citations.is_empty() {
            vec![Citation::fallback()]
        } else {
            citations
        };
        Self {
            title: title.into(),
            slides,
            narration_text: narration_text.into(),
            takeaways,
            citations,
            audio_url: None,
            bg_music_url: None,
        }
    }

    /// Attach a background music track
    #[must_use]
    pub fn with_bg_music(mut self, url: impl Into<String>) -> Self {
        self.bg_music_url = Some(url.into());
        self
    }

    /// Attach a synthesized narration audio URL
    #[must_use]
    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    /// Whether any citation is grounded in a retrieval hit
    #[must_use]
    pub fn has_grounded_citation(&self) -> bool {
        self.citations.iter().any(Citation::is_grounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload(takeaways: Vec<String>, citations: Vec<Citation>) -> StoryPayload {
        StoryPayload::new(
            "Title",
            vec![Slide::new("/assets/a.jpg", "caption")],
            "narration",
            takeaways,
            citations,
        )
    }

    mod citation {
        use super::*;

        #[test]
        fn fallback_is_gita_2_47() {
            let citation = Citation::fallback();
            assert_eq!(citation.work, "Bhagavad Gita");
            assert_eq!(citation.reference, Some("2.47".to_string()));
        }

        #[test]
        fn fallback_is_not_grounded() {
            assert!(!Citation::fallback().is_grounded());
        }

        #[test]
        fn other_citations_are_grounded() {
            assert!(Citation::new("Yoga Sutra").with_reference("1.2").is_grounded());
            assert!(Citation::new("Bhagavad Gita").is_grounded());
        }

        #[test]
        fn reference_serializes_as_ref() {
            let json = serde_json::to_string(&Citation::fallback()).unwrap();
            assert!(json.contains("\"ref\":\"2.47\""));
        }

        #[test]
        fn missing_reference_is_omitted() {
            let json = serde_json::to_string(&Citation::new("Upanishads")).unwrap();
            assert!(!json.contains("ref"));
        }
    }

    mod story_payload {
        use super::*;

        #[test]
        fn takeaways_are_capped_at_three() {
            let takeaways = (1..=5).map(|i| format!("takeaway {i}")).collect();
            let payload = sample_payload(takeaways, vec![Citation::fallback()]);
            assert_eq!(payload.takeaways.len(), MAX_TAKEAWAYS);
        }

        #[test]
        fn empty_citations_replaced_with_fallback() {
            let payload = sample_payload(vec![], vec![]);
            assert_eq!(payload.citations, vec![Citation::fallback()]);
        }

        #[test]
        fn grounded_citations_are_kept() {
            let cite = Citation::new("Yoga Sutra").with_reference("1.2");
            let payload = sample_payload(vec![], vec![cite.clone()]);
            assert_eq!(payload.citations, vec![cite]);
            assert!(payload.has_grounded_citation());
        }

        #[test]
        fn fallback_citation_is_not_grounded() {
            let payload = sample_payload(vec![], vec![]);
            assert!(!payload.has_grounded_citation());
        }

        #[test]
        fn builder_attaches_media_urls() {
            let payload = sample_payload(vec![], vec![])
                .with_bg_music("/audio/bg.mp3")
                .with_audio("/static/tts/abc.mp3");
            assert_eq!(payload.bg_music_url, Some("/audio/bg.mp3".to_string()));
            assert_eq!(payload.audio_url, Some("/static/tts/abc.mp3".to_string()));
        }

        #[test]
        fn optional_urls_omitted_from_json() {
            let json = serde_json::to_string(&sample_payload(vec![], vec![])).unwrap();
            assert!(!json.contains("audio_url"));
            assert!(!json.contains("bg_music_url"));
        }
    }
}
