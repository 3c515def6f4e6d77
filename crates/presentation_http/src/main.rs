//! Sattva HTTP Server
//!
//! Main entry point for the guidance orchestrator API.

use std::{sync::Arc, time::Duration};

use ai_core::ChatCompletionsEngine;
use ai_speech::SpeechSynthesisCoordinator;
use application::ports::{GenerationPort, KnowledgePort, RetrievalPort};
use application::{EvidencePlanner, PracticeService, StoryPipeline};
use infrastructure::{
    telemetry, AppConfig, GenerationAdapter, KnowledgeAdapter, RetrievalAdapter,
};
use integration_websearch::InsightAgent;
use presentation_http::{create_router, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("sattva_server=debug,presentation_http=debug,tower_http=info");

    info!("Sattva v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.generation.model,
        speech_engine = ?config.speech.engine,
        "Configuration loaded"
    );

    // Wire collaborator adapters into the pipeline ports
    let retrieval: Arc<dyn RetrievalPort> = Arc::new(
        RetrievalAdapter::new(config.retrieval.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize retrieval: {e}"))?,
    );

    let engine = ChatCompletionsEngine::new(config.generation.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize generation: {e}"))?;
    let generation: Arc<dyn GenerationPort> = Arc::new(GenerationAdapter::new(engine));

    let agent = InsightAgent::new(config.websearch.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize knowledge agent: {e}"))?;
    let knowledge: Arc<dyn KnowledgePort> = Arc::new(KnowledgeAdapter::new(agent));

    let pipeline = StoryPipeline::new(retrieval, knowledge, Arc::clone(&generation));

    let speech = SpeechSynthesisCoordinator::from_config(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech: {e}"))?;

    let state = AppState {
        pipeline: Arc::new(pipeline),
        planner: EvidencePlanner::new(),
        practice: PracticeService::new(),
        speech: Arc::new(speech),
        generation,
        bg_music_url: config.server.bg_music_url.clone(),
    };

    let app = create_router(state, &config.speech.media_root);

    // CORS: open in development, restricted when origins are configured
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
