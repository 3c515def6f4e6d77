//! Prompt templates for narration generation

use domain::{RetrievalHit, WebSnippet};

/// Maximum retrieval hits included in the generation context
const MAX_CONTEXT_HITS: usize = 3;

/// Maximum web snippets included in the generation context
const MAX_CONTEXT_SNIPPETS: usize = 2;

/// System prompt framing the generator as a calm guide
pub const STORY_SYSTEM: &str = "You are a compassionate ancient guide. \
You tell short calming stories in simple English with a warm, empathic \
voice and at most two gentle emojis. Each story ends with a 'Takeaways:' \
section of up to three short bullet lines. No medical or legal advice.";

/// Build the user prompt from the problem statement and context block
#[must_use]
pub fn story_user_prompt(problem_text: &str, context: &str) -> String {
    format!(
        "Problem:\n{problem_text}\n\n\
         Relevant scripture and context:\n{context}\n\n\
         Write a short calming story with one subtle life lesson, then a \
         'Takeaways:' section with up to three short bullet lines."
    )
}

/// Format retrieval hits and web snippets into a generation context block.
///
/// Takes up to three hits and two snippets; returns "(no context)" when
/// both are empty.
#[must_use]
pub fn format_context(hits: &[RetrievalHit], snippets: &[WebSnippet]) -> String {
    let mut parts = Vec::new();
    for hit in hits.iter().take(MAX_CONTEXT_HITS) {
        parts.push(format!("[RAG] {}: {}", hit.metadata.label(), hit.document));
    }
    for snippet in snippets.iter().take(MAX_CONTEXT_SNIPPETS) {
        parts.push(format!("[WEB] {}: {}", snippet.title, snippet.snippet));
    }
    if parts.is_empty() {
        "(no context)".to_string()
    } else {
        parts.join("\n")
    }
}
