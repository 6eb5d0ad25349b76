//! RAG query handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::ErrorDetail;
use crate::api::types::RagQueryRequest;
use crate::api::types::RagQueryResponse;

/// Answer a question over the document index.
///
/// The response carries the generated answer plus the retrieved chunks it
/// was grounded on. A failure in any provider call surfaces as the mapped
/// status code with the failure message in `detail`.
pub async fn rag_query(
    State(state): State<AppState>,
    Json(request): Json<RagQueryRequest>,
) -> Result<Json<RagQueryResponse>, (StatusCode, Json<ErrorDetail>)> {
    info!("POST /api/rag-query: {}", request.question);

    match state.rag_service.answer(&request.question).await {
        Ok(answer) => Ok(Json(RagQueryResponse::from(answer))),
        Err(e) => {
            error!("Error processing RAG query: {}", e);
            Err((
                e.status_code(),
                Json(ErrorDetail {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}
