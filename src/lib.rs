//! chainrag: RAG service over a blockchain documentation index
//!
//! Answers questions by embedding them, retrieving the nearest document
//! chunks from a Pinecone index, and asking a chat model to answer from
//! that retrieved context alone. Served over HTTP along with a direct
//! assistant completion endpoint and an LLM-backed categorizer.

pub mod api;
pub mod cli;
pub mod config;
pub mod embeddings;
pub mod errors;
pub mod index;
pub mod llm;
pub mod logging;
pub mod rag;

pub use config::AppConfig;
pub use errors::*;
