//! Pinecone data-plane query client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::ChainRagError;
use crate::errors::Result;
use crate::index::ScoredChunk;

/// Metadata key the ingestion pipeline stores chunk text under.
const TEXT_METADATA_KEY: &str = "text";

/// Nearest-neighbor lookup over the document index.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Return up to `top_k` chunks closest to `vector`, best match first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    async fn query(&self, vector: Vec<f32>, top_k: usize) -> Result<Vec<ScoredChunk>>;
}

/// Client for the Pinecone data-plane query API
pub struct VectorIndexClient {
    index_host: String,
    index_name: String,
    api_key: String,
    client: Client,
}

impl VectorIndexClient {
    /// Create a new index client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(index_host: String, index_name: String, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| ChainRagError::Http(e.to_string()))?;

        Ok(Self {
            index_host,
            index_name,
            api_key,
            client,
        })
    }

    /// Create an index client from the application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.pinecone_index_host().to_string(),
            config.pinecone_index_name().to_string(),
            config.pinecone_api_key().to_string(),
        )
    }

    /// Name of the backing index
    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[async_trait]
impl VectorIndex for VectorIndexClient {
    async fn query(&self, vector: Vec<f32>, top_k: usize) -> Result<Vec<ScoredChunk>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct QueryRequest {
            vector: Vec<f32>,
            top_k: usize,
            include_metadata: bool,
        }

        #[derive(Deserialize)]
        struct QueryResponse {
            #[serde(default)]
            matches: Vec<QueryMatch>,
        }

        let url = format!("{}/query", self.index_host);
        debug!(
            "Querying index '{}' for top {} matches: {}",
            self.index_name, top_k, url
        );

        let request = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
        };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ChainRagError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChainRagError::Retrieval(format!(
                "Pinecone API error ({status}): {error_text}"
            )));
        }

        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| ChainRagError::Retrieval(format!("Failed to parse response: {e}")))?;

        Ok(result.matches.into_iter().map(chunk_from_match).collect())
    }
}

/// One match in a Pinecone query response
#[derive(Debug, Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f32,
    metadata: Option<Map<String, Value>>,
}

/// Lift an index match into a document chunk.
///
/// Chunk text lives under the `"text"` metadata key written at ingestion
/// time; the remaining keys stay attached as chunk metadata. A match with
/// no usable text yields an empty content string rather than an error.
fn chunk_from_match(m: QueryMatch) -> ScoredChunk {
    let mut metadata = m.metadata.unwrap_or_default();
    let content = match metadata.get(TEXT_METADATA_KEY) {
        Some(Value::String(text)) => {
            let text = text.clone();
            metadata.remove(TEXT_METADATA_KEY);
            text
        }
        _ => String::new(),
    };

    debug!("Match {} scored {:.4}", m.id, m.score);

    ScoredChunk {
        content,
        metadata,
        score: m.score,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn metadata_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_chunk_text_is_lifted_out_of_metadata() {
        let m = QueryMatch {
            id: "chunk-1".to_string(),
            score: 0.91,
            metadata: Some(metadata_map(json!({
                "text": "Rollups batch transactions off-chain.",
                "source": "docs/rollups.md",
            }))),
        };

        let chunk = chunk_from_match(m);
        assert_eq!(chunk.content, "Rollups batch transactions off-chain.");
        assert!((chunk.score - 0.91).abs() < f32::EPSILON);
        assert_eq!(
            chunk.metadata.get("source"),
            Some(&json!("docs/rollups.md"))
        );
        assert!(!chunk.metadata.contains_key("text"));
    }

    #[test]
    fn test_match_without_text_keeps_metadata_intact() {
        let m = QueryMatch {
            id: "chunk-2".to_string(),
            score: 0.5,
            metadata: Some(metadata_map(json!({ "source": "docs/intro.md" }))),
        };

        let chunk = chunk_from_match(m);
        assert!(chunk.content.is_empty());
        assert_eq!(chunk.metadata.len(), 1);
    }

    #[test]
    fn test_non_string_text_is_treated_as_missing() {
        let m = QueryMatch {
            id: "chunk-3".to_string(),
            score: 0.5,
            metadata: Some(metadata_map(json!({ "text": 42 }))),
        };

        let chunk = chunk_from_match(m);
        assert!(chunk.content.is_empty());
        // The malformed value stays visible to the caller
        assert_eq!(chunk.metadata.get("text"), Some(&json!(42)));
    }

    #[test]
    fn test_match_without_metadata() {
        let m = QueryMatch {
            id: "chunk-4".to_string(),
            score: 0.1,
            metadata: None,
        };

        let chunk = chunk_from_match(m);
        assert!(chunk.content.is_empty());
        assert!(chunk.metadata.is_empty());
    }

    #[tokio::test]
    #[ignore = "Requires Pinecone API key"]
    async fn test_pinecone_query() -> Result<()> {
        let api_key = std::env::var("PINECONE_API_KEY").unwrap_or_default();
        let index_host = std::env::var("PINECONE_INDEX_HOST").unwrap_or_default();
        let client = VectorIndexClient::new(index_host, "blockchain-rag".to_string(), api_key)?;

        let chunks = client.query(vec![0.0; 1536], 3).await?;
        assert!(chunks.len() <= 3);
        Ok(())
    }
}
