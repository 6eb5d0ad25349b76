//! Assistant handlers: direct completion and categorization

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::CategorizeRequest;
use crate::api::types::CategorizeResponse;
use crate::api::types::CompletionRequest;
use crate::api::types::CompletionResponse;
use crate::llm::categorize_text;
use crate::llm::prompts;
use crate::llm::ChatMessage;
use crate::llm::ChatOptions;

/// Direct chat completion with the blockchain assistant persona.
///
/// The prompt and the reply both go into the shared conversation memory,
/// so follow-up prompts see the recent exchanges.
pub async fn completion(
    State(state): State<AppState>,
    Json(request): Json<CompletionRequest>,
) -> Result<Json<ApiResponse<CompletionResponse>>, (StatusCode, Json<ApiResponse<CompletionResponse>>)>
{
    info!("POST /api/completion");

    let model = request
        .model
        .unwrap_or_else(|| state.completion_model.clone());

    state
        .conversation
        .remember(ChatMessage::user(request.prompt))
        .await;

    let mut messages = vec![ChatMessage::system(prompts::ASSISTANT_SYSTEM_PROMPT)];
    messages.extend(state.conversation.recent().await);

    let options = ChatOptions {
        temperature: Some(0.3),
        top_p: Some(0.9),
        stop: Some(vec!["\n\n".to_string()]),
    };

    match state.chat.complete(&model, messages, options).await {
        Ok(reply) => {
            state.conversation.remember(reply.clone()).await;
            Ok(Json(ApiResponse::success(CompletionResponse::from(reply))))
        }
        Err(e) => {
            error!("Error generating completion: {}", e);
            Err((e.status_code(), Json(ApiResponse::error(e.to_string()))))
        }
    }
}

/// Categorize a discussion into the fixed blockchain category list.
pub async fn categorize(
    State(state): State<AppState>,
    Json(request): Json<CategorizeRequest>,
) -> Result<Json<ApiResponse<CategorizeResponse>>, (StatusCode, Json<ApiResponse<CategorizeResponse>>)>
{
    info!("POST /api/categorize");

    match categorize_text(state.chat.as_ref(), &state.completion_model, &request.text).await {
        Ok(categories) => Ok(Json(ApiResponse::success(CategorizeResponse { categories }))),
        Err(e) => {
            error!("Error categorizing text: {}", e);
            Err((e.status_code(), Json(ApiResponse::error(e.to_string()))))
        }
    }
}
