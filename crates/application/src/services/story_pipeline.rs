//! Story pipeline
//!
//! Sequences Plan -> Retrieve -> Search -> Generate -> Compose as a
//! linear staged pipeline. Each stage consumes the previous stage's
//! record and returns a new one with added fields; nothing is mutated in
//! place, so every stage can be exercised in isolation.
//!
//! Every evidence stage is best-effort: retrieval errors collapse to zero
//! hits, the knowledge agent degrades internally, and generation errors
//! degrade to the composer's templated narration. A pipeline run always
//! produces a complete, well-formed payload.

use std::{fmt, sync::Arc};

use domain::{EvidenceSource, Plan, RetrievalHit, StoryPayload, WebSnippet};
use tracing::{debug, info, instrument, warn};

use crate::ports::{GenerationPort, KnowledgePort, RetrievalPort};
use crate::services::composer::StoryComposer;
use crate::services::planner::EvidencePlanner;
use crate::services::prompts::{format_context, story_user_prompt, STORY_SYSTEM};

/// Number of passages requested from the retrieval index
const TOP_K: usize = 3;

/// Input to one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// The user's stated problem
    pub problem_text: String,
    /// Emotion tags supplied with the problem
    pub emotion_tags: Vec<String>,
}

/// Result of a pipeline run
#[derive(Debug, Clone)]
pub struct StoryOutcome {
    /// Composed story payload
    pub payload: StoryPayload,
    /// The plan the run executed under
    pub plan: Plan,
}

/// Record produced by the plan stage
struct Planned {
    problem_text: String,
    plan: Plan,
}

/// Record produced by the retrieve stage
struct Retrieved {
    problem_text: String,
    plan: Plan,
    hits: Vec<RetrievalHit>,
}

/// Record produced by the search stage
struct Searched {
    problem_text: String,
    plan: Plan,
    hits: Vec<RetrievalHit>,
    snippets: Vec<WebSnippet>,
}

/// Record produced by the generate stage
struct Generated {
    plan: Plan,
    hits: Vec<RetrievalHit>,
    snippets: Vec<WebSnippet>,
    narration: String,
}

/// Staged guidance pipeline over the collaborator ports
pub struct StoryPipeline {
    planner: EvidencePlanner,
    composer: StoryComposer,
    retrieval: Arc<dyn RetrievalPort>,
    knowledge: Arc<dyn KnowledgePort>,
    generation: Arc<dyn GenerationPort>,
}

impl fmt::Debug for StoryPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoryPipeline")
            .field("collection", &self.retrieval.collection_name())
            .field("model", &self.generation.current_model())
            .finish_non_exhaustive()
    }
}

impl StoryPipeline {
    /// Create a pipeline over the given ports
    pub fn new(
        retrieval: Arc<dyn RetrievalPort>,
        knowledge: Arc<dyn KnowledgePort>,
        generation: Arc<dyn GenerationPort>,
    ) -> Self {
        Self {
            planner: EvidencePlanner::new(),
            composer: StoryComposer::new(),
            retrieval,
            knowledge,
            generation,
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// Never fails: partial evidence failures degrade to generic content.
    #[instrument(skip(self, request), fields(
        problem_len = request.problem_text.len(),
        tags = request.emotion_tags.len()
    ))]
    pub async fn run(&self, request: PipelineRequest) -> StoryOutcome {
        let planned = self.plan(request);
        let retrieved = self.retrieve(planned).await;
        let searched = self.search(retrieved).await;
        let generated = self.generate(searched).await;
        self.compose(generated)
    }

    /// Plan stage: resolve persona and evidence sources
    fn plan(&self, request: PipelineRequest) -> Planned {
        let plan = self
            .planner
            .plan_sources(&request.problem_text, &request.emotion_tags);
        debug!(persona = %plan.persona, "Plan stage complete");
        Planned {
            problem_text: request.problem_text,
            plan,
        }
    }

    /// Retrieve stage: top-k similarity search, errors swallowed to zero
    /// hits
    async fn retrieve(&self, planned: Planned) -> Retrieved {
        let hits = if planned.plan.includes(EvidenceSource::Retrieval) {
            match self.retrieval.search(&planned.problem_text, TOP_K).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!(error = %e, "Retrieval failed, continuing without hits");
                    Vec::new()
                },
            }
        } else {
            Vec::new()
        };

        debug!(hits = hits.len(), "Retrieve stage complete");

        Retrieved {
            problem_text: planned.problem_text,
            plan: planned.plan,
            hits,
        }
    }

    /// Search stage: plan queries and gather web insights when requested
    async fn search(&self, retrieved: Retrieved) -> Searched {
        let mut snippets = Vec::new();
        if retrieved.plan.includes(EvidenceSource::WebSearch) {
            let queries = self
                .planner
                .plan_queries(&retrieved.problem_text, retrieved.plan.work_hint.as_deref());
            for query in queries {
                for line in self.knowledge.insights(&query).await {
                    snippets.push(WebSnippet::new(query.clone(), line));
                }
            }
        }

        debug!(snippets = snippets.len(), "Search stage complete");

        Searched {
            problem_text: retrieved.problem_text,
            plan: retrieved.plan,
            hits: retrieved.hits,
            snippets,
        }
    }

    /// Generate stage: narration from the black-box generator.
    ///
    /// Runs when generation is planned or retrieval came up empty (gap
    /// filler). Generator errors degrade to an empty narration, which the
    /// composer replaces with the fixed template.
    async fn generate(&self, searched: Searched) -> Generated {
        let wanted =
            searched.plan.includes(EvidenceSource::Generation) || searched.hits.is_empty();

        let narration = if wanted {
            let context = format_context(&searched.hits, &searched.snippets);
            let user_prompt = story_user_prompt(&searched.problem_text, &context);
            match self.generation.generate(STORY_SYSTEM, &user_prompt).await {
                Ok(result) => {
                    debug!(model = %result.model, latency_ms = result.latency_ms, "Generate stage complete");
                    result.content
                },
                Err(e) => {
                    warn!(error = %e, "Generation failed, composing from template");
                    String::new()
                },
            }
        } else {
            String::new()
        };

        Generated {
            plan: searched.plan,
            hits: searched.hits,
            snippets: searched.snippets,
            narration,
        }
    }

    /// Compose stage: deterministic merge into the final payload
    fn compose(&self, generated: Generated) -> StoryOutcome {
        let payload = self
            .composer
            .compose(&generated.hits, &generated.snippets, &generated.narration);

        info!(
            grounded = payload.has_grounded_citation(),
            takeaways = payload.takeaways.len(),
            "Pipeline run composed"
        );

        StoryOutcome {
            payload,
            plan: generated.plan,
        }
    }
}
