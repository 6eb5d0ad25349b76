//! One-shot RAG query handler

use crate::cli::output::print_info;
use crate::cli::output::print_sources;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::rag::RagService;
use crate::rag::TOP_K;

pub async fn handle_query(config: &AppConfig, question: String, show_sources: bool) -> Result<()> {
    println!("🤖 chainrag Query");
    println!("=================\n");
    println!("Question: {question}\n");

    print_info(&format!(
        "Index: {} | Model: {}",
        config.pinecone_index_name(),
        config.chat_model()
    ));

    println!("⏳ Initializing RAG service...");
    let rag_service = RagService::from_config(config)?;

    println!("🔍 Retrieving top {TOP_K} chunks and generating answer...");
    let response = rag_service.answer(&question).await?;

    println!("\n📝 Answer:");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", response.answer);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    if show_sources {
        print_sources(&response.sources);
    } else {
        println!("💡 Use --sources to see the retrieved chunks");
    }

    Ok(())
}
