//! Full inbox view command.

use std::path::PathBuf;

use clap::Args;

use crate::output::{self, OutputFormat};
use estatehub_core::config::AppConfig;
use estatehub_core::AppResult;
use estatehub_core::types::UserId;
use estatehub_inbox::view::{InboxView, PagePayload};

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Page payload JSON file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Viewing user ID
    #[arg(short, long)]
    pub user: UserId,
    /// Channel search query
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// Execute the view command
pub async fn execute(
    args: &ViewArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let payload: PagePayload = super::read_json(&args.input).await?;
    let view = InboxView::derive(&payload, args.user, &args.query, config);

    let text = match format {
        OutputFormat::Json => output::render_json(&view)?,
        OutputFormat::Table => render_sections(&view),
    };
    output::emit(&text);
    Ok(())
}

fn render_sections(view: &InboxView) -> String {
    let sidebar = output::render_pairs(
        view.links
            .iter()
            .map(|link| (link.path.as_str(), link.badge.to_string())),
    );
    let unclassified = view
        .notifications
        .iter()
        .filter(|n| n.bucket.is_none())
        .count();
    let notifications = output::render_pairs([
        ("total", view.notifications.len().to_string()),
        ("unclassified", unclassified.to_string()),
    ]);
    let channels = output::render_pairs(view.channels.iter().map(|c| {
        (
            c.id.to_string(),
            format!("{} [{}] ({} unread)", c.title, c.subject_title, c.unread),
        )
    }));
    let state = if view.sidebar.open { "open" } else { "collapsed" };

    format!("Sidebar ({state})\n{sidebar}\n\nNotifications\n{notifications}\n\nChannels\n{channels}")
}
