//! Unread badge count command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use estatehub_core::AppResult;
use estatehub_entity::notification::RouteBucket;
use estatehub_inbox::counts::{build_counts, build_unread_counts};
use estatehub_inbox::view::PagePayload;

/// Arguments for the counts command
#[derive(Debug, Args)]
pub struct CountsArgs {
    /// Page payload JSON file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Count read notifications too
    #[arg(long)]
    pub all: bool,
}

/// One badge row
#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    #[tabled(rename = "Route")]
    route: &'static str,
    #[tabled(rename = "Path")]
    path: &'static str,
    #[tabled(rename = "Unread")]
    count: u32,
}

/// Execute the counts command
pub async fn execute(args: &CountsArgs, format: OutputFormat) -> AppResult<()> {
    let payload: PagePayload = super::read_json(&args.input).await?;

    let counts = if args.all {
        build_counts(&payload.notifications)
    } else {
        build_unread_counts(&payload.notifications)
    };

    let text = match format {
        OutputFormat::Json => output::render_json(&counts)?,
        OutputFormat::Table => {
            let rows: Vec<CountRow> = RouteBucket::ALL
                .into_iter()
                .filter(|b| b.is_badged())
                .map(|b| CountRow {
                    route: b.as_str(),
                    path: b.path(),
                    count: counts.get(b),
                })
                .collect();
            output::render_rows(&rows, format)?
        }
    };
    output::emit(&text);
    Ok(())
}
