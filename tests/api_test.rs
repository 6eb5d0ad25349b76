use std::sync::Arc;

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use chainrag::api::build_router;
use chainrag::api::handlers::AppState;
use chainrag::embeddings::Embedder;
use chainrag::errors::ChainRagError;
use chainrag::index::ScoredChunk;
use chainrag::index::VectorIndex;
use chainrag::llm::ChatMessage;
use chainrag::llm::ChatModel;
use chainrag::llm::ChatOptions;
use chainrag::llm::ConversationMemory;
use chainrag::rag::RagService;
use chainrag::Result;
use serde_json::json;
use serde_json::Value;
use tower::ServiceExt;

struct FixedEmbedder;

#[async_trait]
impl Embedder for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![0.0; 3])
    }
}

struct FixedIndex {
    chunks: Vec<ScoredChunk>,
}

#[async_trait]
impl VectorIndex for FixedIndex {
    async fn query(&self, _vector: Vec<f32>, _top_k: usize) -> Result<Vec<ScoredChunk>> {
        Ok(self.chunks.clone())
    }
}

/// Chat stub returning a fixed reply and recording the messages it saw.
struct ScriptedChat {
    reply: String,
    seen_messages: std::sync::Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedChat {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen_messages: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatModel for ScriptedChat {
    async fn complete(
        &self,
        _model: &str,
        messages: Vec<ChatMessage>,
        _options: ChatOptions,
    ) -> Result<ChatMessage> {
        self.seen_messages.lock().unwrap().push(messages);
        Ok(ChatMessage::assistant(self.reply.clone()))
    }
}

struct FailingChat;

#[async_trait]
impl ChatModel for FailingChat {
    async fn complete(
        &self,
        _model: &str,
        _messages: Vec<ChatMessage>,
        _options: ChatOptions,
    ) -> Result<ChatMessage> {
        Err(ChainRagError::Completion("model unavailable".to_string()))
    }
}

fn chunk(content: &str, source: &str) -> ScoredChunk {
    ScoredChunk {
        content: content.to_string(),
        metadata: json!({ "source": source }).as_object().cloned().unwrap(),
        score: 0.9,
    }
}

fn router_with(chat: Arc<dyn ChatModel>, chunks: Vec<ScoredChunk>) -> Router {
    let rag_service = Arc::new(RagService::new(
        Arc::new(FixedEmbedder),
        Arc::new(FixedIndex { chunks }),
        chat.clone(),
        "gpt-3.5-turbo".to_string(),
    ));

    build_router(AppState {
        rag_service,
        chat,
        conversation: Arc::new(ConversationMemory::new()),
        completion_model: "gpt-4o-mini".to_string(),
    })
}

async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = router_with(Arc::new(ScriptedChat::new("unused")), vec![]);

    let (status, body) = get(router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("healthy"));
    assert_eq!(body["data"]["version"], json!(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_rag_query_returns_answer_and_sources() {
    let router = router_with(
        Arc::new(ScriptedChat::new("Rollups batch transactions.")),
        vec![chunk("first", "a.md"), chunk("second", "b.md")],
    );

    let (status, body) =
        post_json(router, "/api/rag-query", &json!({ "question": "What is a rollup?" })).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["answer"], json!("Rollups batch transactions."));

    let sources = body["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0]["content"], json!("first"));
    assert_eq!(sources[0]["metadata"]["source"], json!("a.md"));
    assert_eq!(sources[1]["content"], json!("second"));

    // Flat body: no envelope, scores stay internal
    assert!(body.get("success").is_none());
    assert!(sources[0].get("score").is_none());
}

#[tokio::test]
async fn test_rag_query_maps_completion_failure_to_bad_gateway() {
    let router = router_with(Arc::new(FailingChat), vec![chunk("first", "a.md")]);

    let (status, body) =
        post_json(router, "/api/rag-query", &json!({ "question": "q" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let body: Value = serde_json::from_str(&body).unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("Completion error"));
    assert!(detail.contains("model unavailable"));
}

#[tokio::test]
async fn test_rag_query_rejects_malformed_body() {
    let router = router_with(Arc::new(ScriptedChat::new("unused")), vec![]);

    let (status, _body) = post_json(router, "/api/rag-query", &json!({ "q": "typo" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_rag_query_accepts_empty_question() {
    let router = router_with(Arc::new(ScriptedChat::new("empty in, answer out")), vec![]);

    let (status, body) = post_json(router, "/api/rag-query", &json!({ "question": "" })).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["answer"], json!("empty in, answer out"));
    assert_eq!(body["sources"], json!([]));
}

#[tokio::test]
async fn test_completion_endpoint_threads_conversation() {
    let chat = Arc::new(ScriptedChat::new("an assistant reply"));
    let rag_service = Arc::new(RagService::new(
        Arc::new(FixedEmbedder),
        Arc::new(FixedIndex { chunks: vec![] }),
        chat.clone(),
        "gpt-3.5-turbo".to_string(),
    ));
    let state = AppState {
        rag_service,
        chat: chat.clone(),
        conversation: Arc::new(ConversationMemory::new()),
        completion_model: "gpt-4o-mini".to_string(),
    };

    let (status, body) = post_json(
        build_router(state.clone()),
        "/api/completion",
        &json!({ "prompt": "What is a validator?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["role"], json!("assistant"));
    assert_eq!(body["data"]["content"], json!("an assistant reply"));

    let (status, _body) = post_json(
        build_router(state),
        "/api/completion",
        &json!({ "prompt": "And a slasher?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Second call sees the persona plus the remembered first exchange
    let seen = chat.seen_messages.lock().unwrap();
    assert_eq!(seen.len(), 2);
    let second_call = &seen[1];
    assert_eq!(second_call.len(), 4);
    assert_eq!(second_call[0].role, "system");
    assert_eq!(second_call[1].content, "What is a validator?");
    assert_eq!(second_call[2].role, "assistant");
    assert_eq!(second_call[3].content, "And a slasher?");
}

#[tokio::test]
async fn test_categorize_endpoint() {
    let router = router_with(Arc::new(ScriptedChat::new(r#"["Rust", "Solana"]"#)), vec![]);

    let (status, body) = post_json(
        router,
        "/api/categorize",
        &json!({ "text": "Anchor programs on Solana" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["categories"], json!(["Rust", "Solana"]));
}

#[tokio::test]
async fn test_categorize_maps_malformed_reply_to_bad_gateway() {
    let router = router_with(Arc::new(ScriptedChat::new("no array here")), vec![]);

    let (status, body) =
        post_json(router, "/api/categorize", &json!({ "text": "anything" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("Invalid model response"));
}
