//! Complete RAG pipeline: embed, retrieve, generate

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::config::AppConfig;
use crate::embeddings::Embedder;
use crate::embeddings::EmbeddingClient;
use crate::errors::Result;
use crate::index::ScoredChunk;
use crate::index::VectorIndex;
use crate::index::VectorIndexClient;
use crate::llm::prompts;
use crate::llm::ChatClient;
use crate::llm::ChatMessage;
use crate::llm::ChatModel;
use crate::llm::ChatOptions;
use crate::rag::ContextAssembler;

/// Number of chunks retrieved per query. Fixed policy, not configurable
/// per request.
pub const TOP_K: usize = 3;

/// RAG query service over the three provider backends.
pub struct RagService {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorIndex>,
    chat: Arc<dyn ChatModel>,
    context_assembler: ContextAssembler,
    chat_model: String,
}

impl RagService {
    /// Create the service from configuration, building the HTTP clients
    /// for the three provider APIs.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the HTTP clients cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let embedder = Arc::new(EmbeddingClient::from_config(config)?);
        let index = Arc::new(VectorIndexClient::from_config(config)?);
        let chat = Arc::new(ChatClient::from_config(config)?);

        Ok(Self::new(
            embedder,
            index,
            chat,
            config.chat_model().to_string(),
        ))
    }

    /// Create the service from existing backends.
    #[must_use]
    pub fn new(
        embedder: Arc<dyn Embedder>,
        index: Arc<dyn VectorIndex>,
        chat: Arc<dyn ChatModel>,
        chat_model: String,
    ) -> Self {
        Self {
            embedder,
            index,
            chat,
            context_assembler: ContextAssembler::new(),
            chat_model,
        }
    }

    /// Answer a question using only retrieved context.
    ///
    /// # Errors
    ///
    /// A failure in any of the three provider calls (embedding, index
    /// query, completion) propagates out unchanged; there are no partial
    /// results.
    pub async fn answer(&self, question: &str) -> Result<RagAnswer> {
        info!("Processing RAG query: {}", question);

        // Step 1: Embed the question and retrieve the nearest chunks
        debug!("Step 1: Retrieving documents");
        let query_vector = self.embedder.embed(question).await?;
        let chunks = self.index.query(query_vector, TOP_K).await?;
        debug!("Retrieved {} chunks", chunks.len());

        // Step 2: Assemble the context in retrieval order
        debug!("Step 2: Assembling context");
        let context = self.context_assembler.assemble(&chunks);

        // Step 3: Generate the answer. An empty context is still sent; the
        // model decides what to do with an unanswerable question.
        debug!("Step 3: Generating answer");
        let messages = vec![
            ChatMessage::system(prompts::RAG_SYSTEM_PROMPT),
            ChatMessage::user(prompts::build_rag_user_prompt(&context, question)),
        ];
        let reply = self
            .chat
            .complete(&self.chat_model, messages, ChatOptions::default())
            .await?;

        info!("RAG query completed successfully");

        Ok(RagAnswer {
            answer: reply.content,
            sources: chunks,
        })
    }
}

/// Generated answer with the chunks it was grounded on, in retrieval
/// order.
#[derive(Debug, Clone)]
pub struct RagAnswer {
    pub answer: String,
    pub sources: Vec<ScoredChunk>,
}
