//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::llm::ChatClient;
use crate::llm::ConversationMemory;
use crate::rag::RagService;

/// Build the application state from configuration.
///
/// All provider clients are constructed here, before the listener accepts
/// its first request; a request can never observe partially initialized
/// state.
pub fn build_state(config: &AppConfig) -> Result<AppState> {
    let rag_service = Arc::new(RagService::from_config(config)?);
    let chat = Arc::new(ChatClient::from_config(config)?);
    let conversation = Arc::new(ConversationMemory::new());

    Ok(AppState {
        rag_service,
        chat,
        conversation,
        completion_model: config.completion_model().to_string(),
    })
}

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

/// Start the API server and serve until shutdown.
///
/// # Errors
///
/// Returns an error if state construction fails or the listener cannot
/// bind to the requested address.
pub async fn serve_api(config: &AppConfig, host: &str, port: u16) -> Result<()> {
    info!("🚀 Starting chainrag API server...");

    let state = build_state(config)?;
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("📋 RESTful API available at http://{}/api", addr);
    info!("");
    info!("Available endpoints:");
    info!("  GET  /api/health      - Health check");
    info!("  POST /api/rag-query   - Answer a question over the document index");
    info!("  POST /api/completion  - Direct assistant completion");
    info!("  POST /api/categorize  - Categorize a discussion");

    axum::serve(listener, app).await?;

    Ok(())
}
