//! Practice suggestion handler

use axum::{extract::State, Json};
use domain::PracticeItem;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Practice suggestion request body
#[derive(Debug, Deserialize)]
pub struct PracticeSuggestRequest {
    /// Emotion tags guiding the selection
    #[serde(default)]
    pub emotion_tags: Vec<String>,
}

/// Practice suggestion response body
#[derive(Debug, Serialize)]
pub struct PracticeSuggestResponse {
    /// Suggested practices
    pub practices: Vec<PracticeItem>,
}

/// Suggest practices for the user's current state
#[instrument(skip(state, request), fields(tags = request.emotion_tags.len()))]
pub async fn practice_suggest(
    State(state): State<AppState>,
    Json(request): Json<PracticeSuggestRequest>,
) -> Json<PracticeSuggestResponse> {
    Json(PracticeSuggestResponse {
        practices: state.practice.suggest(&request.emotion_tags),
    })
}
