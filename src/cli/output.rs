//! CLI output formatting utilities

use crate::config::AppConfig;
use crate::index::ScoredChunk;

/// Truncate a string at a character boundary (not byte boundary), so
/// multi-byte UTF-8 content never panics the formatter.
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Mask a secret, keeping only the first four characters visible.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        "(not set)".to_string()
    } else if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = secret.chars().take(4).collect();
        format!("{prefix}****")
    }
}

/// Print an informational message
pub fn print_info(message: &str) {
    println!("ℹ️  {message}");
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("✅ {message}");
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("⚠️  {message}");
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("❌ {message}");
}

/// Print the resolved configuration with secrets masked.
pub fn print_config(config: &AppConfig) {
    println!("🔧 chainrag Configuration");
    println!("=========================");

    println!();
    println!("🌐 Server:");
    println!("  Host: {}", config.server_host());
    println!("  Port: {}", config.server_port());

    println!();
    println!("🤖 OpenAI:");
    println!("  Endpoint: {}", config.openai_endpoint());
    println!("  API Key: {}", mask_secret(config.openai_api_key()));
    println!("  Embedding Model: {}", config.embedding_model());
    println!("  Chat Model: {}", config.chat_model());
    println!("  Completion Model: {}", config.completion_model());

    println!();
    println!("🌲 Pinecone:");
    println!("  Index Host: {}", config.pinecone_index_host());
    println!("  Index Name: {}", config.pinecone_index_name());
    println!("  API Key: {}", mask_secret(config.pinecone_api_key()));
}

/// Print the source chunks of a RAG answer.
pub fn print_sources(sources: &[ScoredChunk]) {
    println!("📚 Sources ({} chunks):", sources.len());
    for (idx, source) in sources.iter().enumerate() {
        println!(
            "  {}. Score: {:.3} | \"{}\"",
            idx + 1,
            source.score,
            truncate_str(&source.content, 80)
        );
    }
}
