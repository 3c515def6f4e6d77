//! Port adapters
//!
//! One adapter per collaborator boundary: the retrieval index service,
//! the text generation engine, and the web knowledge agent.

mod generation_adapter;
mod knowledge_adapter;
mod retrieval_adapter;

pub use generation_adapter::GenerationAdapter;
pub use knowledge_adapter::KnowledgeAdapter;
pub use retrieval_adapter::RetrievalAdapter;
