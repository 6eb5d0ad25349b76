//! OpenAI embeddings API client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::ChainRagError;
use crate::errors::Result;

/// Text embedding backend: one fixed-length vector per input text.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the provider returns no
    /// embedding.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Client for the OpenAI embeddings API
pub struct EmbeddingClient {
    model: String,
    endpoint: String,
    api_key: String,
    client: Client,
}

impl EmbeddingClient {
    /// Create a new embedding client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: String, api_key: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| ChainRagError::Http(e.to_string()))?;

        Ok(Self {
            model,
            endpoint,
            api_key,
            client,
        })
    }

    /// Create an embedding client from the application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.openai_endpoint().to_string(),
            config.openai_api_key().to_string(),
            config.embedding_model().to_string(),
        )
    }

    /// Model this client embeds with
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        #[derive(Serialize)]
        struct EmbeddingRequest<'a> {
            input: &'a str,
            model: &'a str,
        }

        #[derive(Deserialize)]
        struct EmbeddingResponse {
            data: Vec<EmbeddingData>,
        }

        #[derive(Deserialize)]
        struct EmbeddingData {
            embedding: Vec<f32>,
        }

        let url = format!("{}/embeddings", self.endpoint);
        debug!("Calling OpenAI embeddings API: {}", url);

        let request = EmbeddingRequest {
            input: text,
            model: &self.model,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
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
            return Err(ChainRagError::Embedding(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        let result: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| ChainRagError::Embedding(format!("Failed to parse response: {e}")))?;

        result
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| ChainRagError::Embedding("No embedding in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_configured_model() {
        let client = EmbeddingClient::new(
            "https://api.openai.com/v1".to_string(),
            "test-key".to_string(),
            "text-embedding-ada-002".to_string(),
        )
        .unwrap();

        assert_eq!(client.model(), "text-embedding-ada-002");
    }

    #[tokio::test]
    #[ignore = "Requires OpenAI API key"]
    async fn test_openai_embedding() -> Result<()> {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let client = EmbeddingClient::new(
            "https://api.openai.com/v1".to_string(),
            api_key,
            "text-embedding-ada-002".to_string(),
        )?;

        let embedding = client.embed("Hello, world!").await?;
        assert_eq!(embedding.len(), crate::embeddings::DEFAULT_EMBEDDING_DIM);
        Ok(())
    }
}
