//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub generation: ServiceStatus,
    pub speech: ServiceStatus,
}

/// Status of a backing service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Readiness check - can the server serve guidance requests?
///
/// Speech is reported but never blocks readiness; the coordinator
/// degrades to its placeholder engine rather than failing.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let generation_healthy = state.generation.is_healthy().await;
    let speech_healthy = state.speech.is_available().await;

    let ready = generation_healthy;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            generation: ServiceStatus {
                healthy: generation_healthy,
                detail: Some(state.generation.current_model().to_string()),
            },
            speech: ServiceStatus {
                healthy: speech_healthy,
                detail: Some(state.speech.primary_engine().to_string()),
            },
        }),
    )
}
