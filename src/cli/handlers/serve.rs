//! API server handler

use crate::api::serve_api;
use crate::config::AppConfig;
use crate::errors::Result;

pub async fn handle_serve(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server_host().to_string());
    let port = port.unwrap_or_else(|| config.server_port());

    println!("🚀 Starting chainrag API Server");
    println!("===============================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌲 Index: {}", config.pinecone_index_name());
    println!();

    serve_api(config, &host, port).await?;

    Ok(())
}
