//! Retrieval port - Interface for the scripture similarity index
//!
//! The index itself (embedding model + vector store) is an external
//! collaborator; the pipeline only ever sees scored hits.

use async_trait::async_trait;
use domain::RetrievalHit;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for similarity search over indexed passages
///
/// Callers must tolerate empty results and errors alike; the pipeline
/// treats both as "no grounded evidence".
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RetrievalPort: Send + Sync {
    /// Search for the top-k passages most similar to the query
    ///
    /// Hits are returned in descending similarity order, as ranked by the
    /// index.
    async fn search(&self, query: &str, k: usize) -> Result<Vec<RetrievalHit>, ApplicationError>;

    /// Check if the index is reachable
    async fn is_available(&self) -> bool;

    /// Name of the indexed collection (e.g. "gita")
    fn collection_name(&self) -> &str;
}
