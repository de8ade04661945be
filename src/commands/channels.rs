//! Chat channel listing command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use estatehub_core::AppResult;
use estatehub_core::types::UserId;
use estatehub_inbox::channel::{channel_summaries, filter_channels};
use estatehub_inbox::view::PagePayload;

/// Arguments for the channels command
#[derive(Debug, Args)]
pub struct ChannelsArgs {
    /// Page payload JSON file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Viewing user ID
    #[arg(short, long)]
    pub user: UserId,
    /// Search member names and subject titles
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// One channel row
#[derive(Debug, Serialize, Tabled)]
struct ChannelRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "With")]
    title: String,
    #[tabled(rename = "Property")]
    subject: String,
    #[tabled(rename = "Unread")]
    unread: usize,
    #[tabled(rename = "Last message")]
    last_message: String,
}

/// Execute the channels command
pub async fn execute(args: &ChannelsArgs, format: OutputFormat) -> AppResult<()> {
    let payload: PagePayload = super::read_json(&args.input).await?;
    let summaries = channel_summaries(filter_channels(&payload.channels, &args.query), args.user);

    let text = match format {
        OutputFormat::Json => output::render_json(&summaries)?,
        OutputFormat::Table => {
            let rows: Vec<ChannelRow> = summaries
                .into_iter()
                .map(|s| ChannelRow {
                    id: s.id.get(),
                    title: s.title,
                    subject: s.subject_title,
                    unread: s.unread,
                    last_message: s
                        .last_message
                        .map(|m| output::truncate(&m.content, 40))
                        .unwrap_or_default(),
                })
                .collect();
            output::render_rows(&rows, format)?
        }
    };
    output::emit(&text);
    Ok(())
}
