//! Practice suggestions
//!
//! Emotion-aware selection of short guided practices. Pure branching over
//! the supplied tags; the anxious-leaning extra practice is appended only
//! when the tags call for it.

use domain::PracticeItem;

/// Tags that add the extra grounding practice
const ANXIOUS_TAGS: [&str; 3] = ["anxiety", "overthinking", "stress"];

/// Suggests practices for the user's current state
#[derive(Debug, Clone, Copy, Default)]
pub struct PracticeService;

impl PracticeService {
    /// Create a practice service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Suggest practices for the given emotion tags
    #[must_use]
    pub fn suggest(&self, emotion_tags: &[String]) -> Vec<PracticeItem> {
        let mut practices = vec![
            PracticeItem::new(
                "Box Breathing 4-4-4-4 🫁",
                "It calms the body and slows racing thoughts. ✨",
                "Patanjali • Hatha Yoga (pranayama)",
                vec![
                    "Inhale 4".to_string(),
                    "Hold 4".to_string(),
                    "Exhale 4".to_string(),
                    "Hold 4 (repeat 5 times)".to_string(),
                ],
            ),
            PracticeItem::new(
                "Heart Focus (Dharana) 🕊️",
                "It anchors your attention. Worry feels smaller.",
                "Vigyana Bhairava Tantra",
                vec![
                    "Sit easy".to_string(),
                    "Place attention at heart".to_string(),
                    "Breathe soft for 1 minute".to_string(),
                ],
            ),
        ];

        if self.is_anxious(emotion_tags) {
            practices.push(PracticeItem::new(
                "One Tiny Karma Step 🧭",
                "Action breaks loops. Small steps build trust in yourself.",
                "Bhagavad Gita 2.47 (act, release the fruit)",
                vec![
                    "Pick one 5-minute task".to_string(),
                    "Do it gently".to_string(),
                    "Let results be light".to_string(),
                ],
            ));
        }

        practices
    }

    /// Whether the tags indicate an anxious state
    fn is_anxious(&self, emotion_tags: &[String]) -> bool {
        emotion_tags
            .iter()
            .any(|tag| ANXIOUS_TAGS.contains(&tag.to_lowercase().as_str()))
    }
}
