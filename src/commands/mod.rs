//! CLI command definitions and dispatch.

pub mod channels;
pub mod classify;
pub mod config;
pub mod counts;
pub mod status;
pub mod view;

use std::path::Path;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::output::OutputFormat;
use estatehub_core::config::AppConfig;
use estatehub_core::AppResult;
use estatehub_core::error::{AppError, ErrorKind};

/// EstateHub — marketplace inbox view model
#[derive(Debug, Parser)]
#[command(name = "estatehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/estatehub.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the sidebar route of every notification
    Classify(classify::ClassifyArgs),
    /// Show unread badge counts per sidebar route
    Counts(counts::CountsArgs),
    /// List chat channels as seen by a user
    Channels(channels::ChannelsArgs),
    /// Derive the full inbox view
    View(view::ViewArgs),
    /// Look up the badge tone of a record status
    Status(status::StatusArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.command {
            Commands::Classify(args) => classify::execute(args, config, self.format).await,
            Commands::Counts(args) => counts::execute(args, self.format).await,
            Commands::Channels(args) => channels::execute(args, self.format).await,
            Commands::View(args) => view::execute(args, config, self.format).await,
            Commands::Status(args) => status::execute(args, self.format),
            Commands::Config(args) => config::execute(args, config, &self.config, self.format),
        }
    }
}

/// Helper: read and parse a JSON file
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read '{}': {}", path.display(), e),
            e,
        )
    })?;

    let parsed = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "Read payload");
    Ok(parsed)
}
