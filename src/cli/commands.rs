//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "chainrag")]
#[command(about = "Blockchain documentation RAG service")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides the configured host)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Answer a single question over the document index
    Query {
        /// The question to answer
        question: String,
        /// Show the retrieved source chunks
        #[arg(short, long)]
        sources: bool,
    },
    /// Show the resolved configuration
    Config,
}
