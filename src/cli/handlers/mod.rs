//! CLI command handlers module
//!
//! Organized by command:
//! - serve: API server
//! - query: one-shot RAG queries
//! - config: configuration display

pub mod config;
pub mod query;
pub mod serve;

pub use config::*;
pub use query::*;
pub use serve::*;
