//! Story composer
//!
//! Deterministic merge of retrieval hits, web snippets, and generated
//! narration into the final [`StoryPayload`]. Pure: no I/O, same inputs
//! always compose the same payload.

use domain::{Citation, RetrievalHit, Slide, StoryPayload, WebSnippet, MAX_TAKEAWAYS};

/// Marker separating narration from its takeaway lines
const TAKEAWAYS_MARKER: &str = "Takeaways:";

/// Fixed story title
const STORY_TITLE: &str = "Do Your Part. Let Worry Be Light.";

/// Narration substituted when generation yields nothing
const TEMPLATE_NARRATION: &str = "You feel heavy because you hold the results too tight. \
Take one kind step. Let the rest be light. 💙\n\n\
Takeaways:\n- Do one tiny step today. 🌱\n- Breathe slow before you act.\n- Let results be light.";

/// Takeaways substituted when the narration carries no marker
const DEFAULT_TAKEAWAYS: [&str; 3] = [
    "Do one tiny step today. 🌱",
    "Breathe slow before you act.",
    "Let results be light.",
];

/// Composes the final story payload
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryComposer;

impl StoryComposer {
    /// Create a composer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compose the story payload from the gathered evidence.
    ///
    /// Precedence rules:
    /// - citation: first hit's metadata, else the fixed default
    /// - narration: generated text if non-empty, else the fixed template
    /// - takeaways: extracted after a `Takeaways:` marker (capped at
    ///   three, bullet/number prefixes stripped), else the default list
    #[must_use]
    pub fn compose(
        &self,
        hits: &[RetrievalHit],
        _snippets: &[WebSnippet],
        narration: &str,
    ) -> StoryPayload {
        let citations = vec![hits
            .first()
            .map_or_else(Citation::fallback, |hit| hit.metadata.citation())];

        let text = if narration.trim().is_empty() {
            TEMPLATE_NARRATION
        } else {
            narration
        };

        let (story_text, takeaways) = Self::split_takeaways(text);

        StoryPayload::new(
            STORY_TITLE,
            vec![
                Slide::new("/assets/kurukshetra_1.jpg", "Arjuna feels fear on the field."),
                Slide::new("/assets/krishna_guides.jpg", "Krishna speaks with care."),
            ],
            story_text,
            takeaways,
            citations,
        )
    }

    /// Split narration at the takeaways marker.
    ///
    /// Returns the narration body and up to [`MAX_TAKEAWAYS`] cleaned
    /// takeaway lines, or the default list when no marker is present.
    fn split_takeaways(text: &str) -> (String, Vec<String>) {
        let Some((body, tail)) = text.split_once(TAKEAWAYS_MARKER) else {
            return (
                text.trim().to_string(),
                DEFAULT_TAKEAWAYS.iter().map(ToString::to_string).collect(),
            );
        };

        let takeaways = tail
            .lines()
            .map(Self::clean_takeaway)
            .filter(|line| !line.is_empty())
            .take(MAX_TAKEAWAYS)
            .collect();

        (body.trim().to_string(), takeaways)
    }

    /// Strip bullet and number prefixes from a takeaway line
    fn clean_takeaway(line: &str) -> String {
        let mut rest = line.trim_matches([' ', '\t', '-', '•', '*']);

        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        if digits > 0 {
            let after = &rest[digits..];
            if let Some(stripped) = after.strip_prefix('.').or_else(|| after.strip_prefix(')')) {
                rest = stripped.trim_start();
            }
        }

        rest.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::PassageMetadata;

    fn composer() -> StoryComposer {
        StoryComposer::new()
    }

    fn grounded_hit() -> RetrievalHit {
        RetrievalHit::new(
            "Act without attachment to results.",
            PassageMetadata {
                work: Some("Bhagavad Gita".to_string()),
                chapter: Some("2".to_string()),
                verse: Some("47".to_string()),
            },
            0.92,
        )
    }

    mod citations {
        use super::*;

        #[test]
        fn zero_hits_yields_exactly_the_default_citation() {
            let payload = composer().compose(&[], &[], "");
            assert_eq!(payload.citations.len(), 1);
            assert_eq!(payload.citations[0], Citation::fallback());
        }

        #[test]
        fn first_hit_metadata_wins() {
            let payload = composer().compose(&[grounded_hit()], &[], "");
            assert_eq!(payload.citations[0].work, "Bhagavad Gita");
            assert_eq!(payload.citations[0].reference, Some("2.47".to_string()));
        }

        #[test]
        fn hit_without_reference_still_cites_the_work() {
            let hit = RetrievalHit::new(
                "text",
                PassageMetadata {
                    work: Some("Yoga Sutra".to_string()),
                    chapter: None,
                    verse: None,
                },
                0.5,
            );
            let payload = composer().compose(&[hit], &[], "");
            assert_eq!(payload.citations[0].work, "Yoga Sutra");
            assert_eq!(payload.citations[0].reference, None);
        }
    }

    mod narration {
        use super::*;

        #[test]
        fn generated_text_wins_over_template() {
            let payload = composer().compose(&[], &[], "A generated story.");
            assert_eq!(payload.narration_text, "A generated story.");
        }

        #[test]
        fn empty_narration_falls_back_to_template() {
            let payload = composer().compose(&[], &[], "");
            assert!(payload.narration_text.starts_with("You feel heavy"));
        }

        #[test]
        fn whitespace_narration_falls_back_to_template() {
            let payload = composer().compose(&[], &[], "   \n  ");
            assert!(payload.narration_text.starts_with("You feel heavy"));
        }

        #[test]
        fn template_narration_excludes_its_takeaway_block() {
            let payload = composer().compose(&[], &[], "");
            assert!(!payload.narration_text.contains(TAKEAWAYS_MARKER));
        }
    }

    mod takeaways {
        use super::*;

        #[test]
        fn marker_with_five_bullets_extracts_exactly_three() {
            let narration = "A story.\n\nTakeaways:\n- one\n- two\n- three\n- four\n- five";
            let payload = composer().compose(&[], &[], narration);
            assert_eq!(
                payload.takeaways,
                vec!["one".to_string(), "two".to_string(), "three".to_string()]
            );
            assert_eq!(payload.narration_text, "A story.");
        }

        #[test]
        fn bullet_and_number_prefixes_are_stripped() {
            let narration =
                "Story.\n\nTakeaways:\n• dotted\n* starred\n1. numbered\n2) parenthesized";
            let payload = composer().compose(&[], &[], narration);
            assert_eq!(payload.takeaways, vec!["dotted", "starred", "numbered"]);
        }

        #[test]
        fn blank_lines_are_skipped() {
            let narration = "Story.\n\nTakeaways:\n\n- one\n\n- two\n";
            let payload = composer().compose(&[], &[], narration);
            assert_eq!(payload.takeaways, vec!["one", "two"]);
        }

        #[test]
        fn no_marker_uses_the_default_list() {
            let payload = composer().compose(&[], &[], "A story without a marker.");
            assert_eq!(payload.takeaways, DEFAULT_TAKEAWAYS.to_vec());
        }
    }

    mod determinism {
        use super::*;

        #[test]
        fn same_inputs_compose_the_same_payload() {
            let hits = vec![grounded_hit()];
            let snippets = vec![WebSnippet::new("q", "insight")];
            let first = composer().compose(&hits, &snippets, "Story.\n\nTakeaways:\n- a");
            let second = composer().compose(&hits, &snippets, "Story.\n\nTakeaways:\n- a");
            assert_eq!(first, second);
        }

        #[test]
        fn title_and_slides_are_fixed() {
            let payload = composer().compose(&[], &[], "");
            assert_eq!(payload.title, STORY_TITLE);
            assert_eq!(payload.slides.len(), 2);
            assert_eq!(payload.slides[0].image_url, "/assets/kurukshetra_1.jpg");
        }
    }
}
