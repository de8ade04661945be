//! EstateHub CLI — derives inbox view state from page payload JSON.
//!
//! Loads configuration, initializes logging and dispatches the subcommand.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use estatehub_core::config::AppConfig;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::emit_error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config).await {
        tracing::error!("Command failed: {}", e);
        output::emit_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. Logs go to stderr so stdout stays parseable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
