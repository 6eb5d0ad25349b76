//! RAG (Retrieval-Augmented Generation) module
//!
//! End-to-end flow for answering a question over the document index:
//! embed the question, retrieve the nearest chunks, assemble their
//! contents into a context block, and ask the chat model to answer from
//! that context alone.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chainrag::config::AppConfig;
//! use chainrag::rag::RagService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = RagService::from_config(&config)?;
//!
//!     let response = service.answer("What is a rollup?").await?;
//!     println!("Answer: {}", response.answer);
//!     println!("Sources: {} chunks", response.sources.len());
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod pipeline;

pub use context::ContextAssembler;
pub use pipeline::RagAnswer;
pub use pipeline::RagService;
pub use pipeline::TOP_K;
