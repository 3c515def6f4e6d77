//! Story handlers

use axum::{extract::State, Json};
use domain::{Citation, StoryPayload};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, state::AppState};

use application::services::PipelineRequest;

/// Emotion tags assumed when a client supplies none
fn default_emotion_tags() -> Vec<String> {
    vec!["anxiety".to_string(), "overthinking".to_string()]
}

/// Story request body
#[derive(Debug, Deserialize, Validate)]
pub struct StoryRequest {
    /// The user's stated problem
    #[validate(length(min = 1, max = 2000))]
    pub problem_text: String,
    /// Emotion tags; defaults to an anxious profile when omitted
    #[serde(default)]
    pub emotion_tags: Option<Vec<String>>,
}

/// Story response body
#[derive(Debug, Serialize)]
pub struct StoryResponse {
    /// Composed story payload
    pub story: StoryPayload,
    /// Persona the run resolved
    pub persona: String,
}

/// Run the guidance pipeline for a problem statement
#[instrument(skip(state, request), fields(problem_len = request.problem_text.len()))]
pub async fn create_story(
    State(state): State<AppState>,
    Json(request): Json<StoryRequest>,
) -> Result<Json<StoryResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let emotion_tags = request
        .emotion_tags
        .filter(|tags| !tags.is_empty())
        .unwrap_or_else(default_emotion_tags);

    let outcome = state
        .pipeline
        .run(PipelineRequest {
            problem_text: request.problem_text,
            emotion_tags,
        })
        .await;

    let story = outcome.payload.with_bg_music(state.bg_music_url.clone());

    Ok(Json(StoryResponse {
        story,
        persona: outcome.plan.persona.as_str().to_string(),
    }))
}

/// Story follow-up question request
#[derive(Debug, Deserialize)]
pub struct StoryQaRequest {
    /// The user's follow-up question
    #[allow(dead_code)]
    pub question: String,
}

/// Story follow-up response
#[derive(Debug, Serialize)]
pub struct StoryQaResponse {
    pub answer_text: String,
    pub citations: Vec<Citation>,
}

/// Answer a follow-up question about the story.
///
/// Keeps to the story's idea and asks one gentle question back.
#[instrument(skip(_request))]
pub async fn story_qa(Json(_request): Json<StoryQaRequest>) -> Json<StoryQaResponse> {
    Json(StoryQaResponse {
        answer_text: "This story teaches: act with a calm mind; let go of results. \
                      Which tiny step fits your life today? ✨"
            .to_string(),
        citations: vec![Citation::fallback()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_request_deserialize() {
        let json = r#"{"problem_text": "I worry"}"#;
        let request: StoryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.problem_text, "I worry");
        assert!(request.emotion_tags.is_none());
    }

    #[test]
    fn story_request_with_tags() {
        let json = r#"{"problem_text": "I worry", "emotion_tags": ["fear"]}"#;
        let request: StoryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.emotion_tags, Some(vec!["fear".to_string()]));
    }

    #[test]
    fn empty_problem_fails_validation() {
        let request = StoryRequest {
            problem_text: String::new(),
            emotion_tags: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn default_tags_are_the_anxious_profile() {
        assert_eq!(default_emotion_tags(), vec!["anxiety", "overthinking"]);
    }
}
