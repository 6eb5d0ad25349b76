use chainrag::cli::commands::Cli;
use chainrag::cli::commands::Commands;
use chainrag::cli::handlers;
use chainrag::cli::output::print_error;
use chainrag::config::AppConfig;
use chainrag::logging;
use chainrag::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config first so its logging section can drive the filter
    let config = AppConfig::load()?;

    if cli.verbose {
        logging::init_logging_with_level("debug")?;
    } else if std::env::var("RUST_LOG").is_ok() {
        logging::init_logging()?;
    } else {
        logging::init_logging_with_level(config.logging_level())?;
    }

    if config.logging_backtrace() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let result = match cli.command {
        Commands::Serve { host, port } => handlers::handle_serve(&config, host, port).await,
        Commands::Query { question, sources } => {
            handlers::handle_query(&config, question, sources).await
        }
        Commands::Config => handlers::handle_config(&config),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
