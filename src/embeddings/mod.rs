//! Embeddings generation module
//!
//! Turns question text into the vector the index is queried with, using
//! the OpenAI embeddings API.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chainrag::config::AppConfig;
//! use chainrag::embeddings::Embedder;
//! use chainrag::embeddings::EmbeddingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let client = EmbeddingClient::from_config(&config)?;
//!
//!     let embedding = client.embed("Hello, world!").await?;
//!     println!("Generated embedding with {} dimensions", embedding.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;

pub use client::Embedder;
pub use client::EmbeddingClient;

/// Embedding dimension of OpenAI text-embedding-ada-002
pub const DEFAULT_EMBEDDING_DIM: usize = 1536;
