//! API server module for serving the RAG and assistant endpoints via REST

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use server::build_router;
pub use server::build_state;
pub use server::serve_api;
