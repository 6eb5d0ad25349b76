//! API request and response types

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::index::ScoredChunk;
use crate::llm::ChatMessage;
use crate::rag::RagAnswer;

/// Standard response envelope for the assistant endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error body for the RAG query endpoint
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// RAG query request
#[derive(Debug, Deserialize)]
pub struct RagQueryRequest {
    pub question: String,
}

/// One source chunk in a RAG answer
#[derive(Debug, Serialize)]
pub struct SourceDocument {
    pub content: String,
    pub metadata: Map<String, Value>,
}

impl From<ScoredChunk> for SourceDocument {
    fn from(chunk: ScoredChunk) -> Self {
        Self {
            content: chunk.content,
            metadata: chunk.metadata,
        }
    }
}

/// RAG query response
#[derive(Debug, Serialize)]
pub struct RagQueryResponse {
    pub answer: String,
    pub sources: Vec<SourceDocument>,
}

impl From<RagAnswer> for RagQueryResponse {
    fn from(answer: RagAnswer) -> Self {
        Self {
            answer: answer.answer,
            sources: answer.sources.into_iter().map(SourceDocument::from).collect(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Direct completion request
#[derive(Debug, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Overrides the configured completion model when set.
    #[serde(default)]
    pub model: Option<String>,
}

/// Direct completion response payload
#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub role: String,
    pub content: String,
}

impl From<ChatMessage> for CompletionResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content,
        }
    }
}

/// Categorization request
#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub text: String,
}

/// Categorization response payload
#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub categories: Vec<String>,
}
