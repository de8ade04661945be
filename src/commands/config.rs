//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use estatehub_core::config::AppConfig;
use estatehub_core::AppResult;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> AppResult<()> {
    let text = match (&args.command, format) {
        (ConfigCommand::Show, OutputFormat::Json) => output::render_json(config)?,
        (ConfigCommand::Show, OutputFormat::Table) => output::render_pairs(settings(config)),
        (ConfigCommand::Validate, _) => format!(
            "Configuration '{config_path}' is valid\n{}",
            output::render_pairs(settings(config))
        ),
    };
    output::emit(&text);
    Ok(())
}

fn settings(config: &AppConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Log level", config.logging.level.clone()),
        ("Log format", config.logging.format.clone()),
        ("Link match", format!("{:?}", config.inbox.link_match).to_lowercase()),
        ("Sidebar open", config.sidebar.open.to_string()),
        ("Collapsed sections", config.sidebar.collapsed.join(",")),
    ]
}
