//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router with all routes.
///
/// `media_root` is served under `/static` so cached speech artifacts are
/// reachable at the URLs the coordinator reports.
pub fn create_router(state: AppState, media_root: &str) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Story API (v1)
        .route("/v1/story", post(handlers::story::create_story))
        .route("/v1/story/qa", post(handlers::story::story_qa))
        // Speech API (v1)
        .route("/v1/tts", post(handlers::speech::synthesize))
        // Knowledge planning API (v1)
        .route("/v1/knowledge/plan", post(handlers::knowledge::knowledge_plan))
        // Practice API (v1)
        .route("/v1/practice/suggest", post(handlers::practice::practice_suggest))
        // Cached speech artifacts
        .nest_service("/static", ServeDir::new(media_root))
        // Attach state
        .with_state(state)
}
