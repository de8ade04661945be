//! Notification classification command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use estatehub_core::config::AppConfig;
use estatehub_core::AppResult;
use estatehub_inbox::classifier::{Classifier, RouteClassifier};
use estatehub_inbox::view::PagePayload;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Page payload JSON file
    #[arg(short, long)]
    pub input: PathBuf,
}

/// One classified notification
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Route")]
    route: String,
}

/// Execute the classify command
pub async fn execute(
    args: &ClassifyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let payload: PagePayload = super::read_json(&args.input).await?;
    let classifier = RouteClassifier::from_config(&config.inbox);

    let rows: Vec<NotificationRow> = payload
        .notifications
        .iter()
        .enumerate()
        .map(|(index, n)| NotificationRow {
            index,
            link: n.link().unwrap_or("-").to_string(),
            title: output::truncate(n.title(), 48),
            route: classifier
                .classify(n)
                .map(|b| b.as_str().to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    output::emit(&output::render_rows(&rows, format)?);
    Ok(())
}
