//! Configuration display handler

use crate::cli::output::print_config;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::config::AppConfig;
use crate::errors::Result;

pub fn handle_config(config: &AppConfig) -> Result<()> {
    print_config(config);
    println!();

    let mut complete = true;
    if config.openai_api_key().is_empty() {
        print_warning("OPENAI_API_KEY is not set; provider calls will fail");
        complete = false;
    }
    if config.pinecone_api_key().is_empty() {
        print_warning("PINECONE_API_KEY is not set; index queries will fail");
        complete = false;
    }
    if config.pinecone_index_host().is_empty() {
        print_warning("pinecone.index_host is not set; index queries will fail");
        complete = false;
    }

    if complete {
        print_success("Configuration is complete");
    }

    Ok(())
}
