//! Application state shared across handlers

use std::sync::Arc;

use ai_speech::SpeechSynthesisCoordinator;
use application::ports::GenerationPort;
use application::{EvidencePlanner, PracticeService, StoryPipeline};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Staged guidance pipeline
    pub pipeline: Arc<StoryPipeline>,
    /// Evidence planner (query planning + adequacy gate)
    pub planner: EvidencePlanner,
    /// Practice suggestions
    pub practice: PracticeService,
    /// Speech synthesis coordinator
    pub speech: Arc<SpeechSynthesisCoordinator>,
    /// Generation port, used for readiness checks
    pub generation: Arc<dyn GenerationPort>,
    /// Background music track attached to story payloads
    pub bg_music_url: String,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("bg_music_url", &self.bg_music_url)
            .finish_non_exhaustive()
    }
}
