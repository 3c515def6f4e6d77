//! Retrieval adapter - Implements RetrievalPort against the index service
//!
//! The vector index (embedding model included) runs as its own service;
//! this adapter only posts the query text and maps the scored results.
//! Distances come back as cosine distances and are flipped to
//! similarities (`1 - distance`), clamped into [0, 1].

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::RetrievalPort;
use async_trait::async_trait;
use domain::{PassageMetadata, RetrievalHit};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::RetrievalConfig;

/// Adapter for the scripture similarity index service
#[derive(Debug, Clone)]
pub struct RetrievalAdapter {
    client: Client,
    config: RetrievalConfig,
}

/// Query request sent to the index service
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    n_results: usize,
}

/// Query response returned by the index service
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<QueryResult>,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    document: String,
    #[serde(default)]
    metadata: PassageMetadata,
    distance: f32,
}

impl RetrievalAdapter {
    /// Create a new adapter
    pub fn new(config: RetrievalConfig) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Build the query URL for the configured collection
    fn query_url(&self) -> String {
        format!(
            "{}/collections/{}/query",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    /// Flip a cosine distance into a similarity score in [0, 1]
    fn similarity(distance: f32) -> f32 {
        (1.0 - distance).clamp(0.0, 1.0)
    }
}

#[async_trait]
impl RetrievalPort for RetrievalAdapter {
    #[instrument(skip(self), fields(query_len = query.len(), k))]
    async fn search(&self, query: &str, k: usize) -> Result<Vec<RetrievalHit>, ApplicationError> {
        let request = QueryRequest {
            query,
            n_results: k,
        };

        let response = self
            .client
            .post(self.query_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApplicationError::ExternalService(format!(
                "Index returned status {}",
                response.status()
            )));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;

        let hits: Vec<RetrievalHit> = body
            .results
            .into_iter()
            .map(|result| {
                RetrievalHit::new(
                    result.document,
                    result.metadata,
                    Self::similarity(result.distance),
                )
            })
            .collect();

        debug!(hits = hits.len(), "Index query complete");

        Ok(hits)
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(5))
            .send()
            .await;
        matches!(response, Ok(resp) if resp.status().is_success())
    }

    fn collection_name(&self) -> &str {
        &self.config.collection
    }
}
