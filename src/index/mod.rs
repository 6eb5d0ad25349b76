//! Vector index module
//!
//! Read-only access to the pre-populated Pinecone index holding the
//! blockchain document chunks. Building and refreshing the index happens
//! in a separate ingestion pipeline.

pub mod client;

use serde_json::Map;
use serde_json::Value;

pub use client::VectorIndex;
pub use client::VectorIndexClient;

/// Document chunk returned by an index query, with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// Chunk text, extracted from the stored metadata.
    pub content: String,
    /// Remaining metadata stored alongside the chunk.
    pub metadata: Map<String, Value>,
    /// Similarity score reported by the index.
    pub score: f32,
}
