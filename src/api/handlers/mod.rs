//! API request handlers

use std::sync::Arc;

use axum::Json;
use chrono::Utc;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::llm::ChatModel;
use crate::llm::ConversationMemory;
use crate::rag::RagService;

pub mod chat;
pub mod rag;

pub use chat::*;
pub use rag::*;

/// Shared application state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub rag_service: Arc<RagService>,
    pub chat: Arc<dyn ChatModel>,
    pub conversation: Arc<ConversationMemory>,
    pub completion_model: String,
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
