//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create the RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // RAG query over the document index
        .route("/rag-query", post(handlers::rag_query))
        // Assistant endpoints
        .route("/completion", post(handlers::completion))
        .route("/categorize", post(handlers::categorize))
        .with_state(state)
}
