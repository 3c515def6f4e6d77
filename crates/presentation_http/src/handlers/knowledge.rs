//! Knowledge planning handler

use axum::{extract::State, Json};
use domain::Citation;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Knowledge plan request body
#[derive(Debug, Deserialize)]
pub struct KnowledgePlanRequest {
    /// The user's stated problem
    pub problem_text: String,
    /// Citations already grounded by retrieval
    #[serde(default)]
    pub rag_citations: Vec<Citation>,
}

/// Knowledge plan response body
#[derive(Debug, Serialize)]
pub struct KnowledgePlanResponse {
    /// Planned web queries
    pub queries: Vec<String>,
    /// Whether the current evidence is sufficient
    pub adequate: bool,
    /// Reason for the verdict
    pub reason: String,
}

/// Plan web queries and rate evidence sufficiency
#[instrument(skip(state, request), fields(citations = request.rag_citations.len()))]
pub async fn knowledge_plan(
    State(state): State<AppState>,
    Json(request): Json<KnowledgePlanRequest>,
) -> Json<KnowledgePlanResponse> {
    let work_hint = request.rag_citations.first().map(|c| c.work.as_str());
    let queries = state.planner.plan_queries(&request.problem_text, work_hint);
    let adequacy = state
        .planner
        .adequacy_gate(&request.problem_text, &request.rag_citations, &[]);

    Json(KnowledgePlanResponse {
        queries,
        adequate: adequacy.sufficient,
        reason: adequacy.reason,
    })
}
