//! Status badge tone lookup command.

use clap::{Args, ValueEnum};

use crate::output::{self, OutputFormat};
use estatehub_core::AppResult;
use estatehub_entity::status::RecordKind;

/// Record kind argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Property listing
    Listing,
    /// Buyer inquiry
    Inquiry,
    /// Site visit
    Tripping,
    /// Offer / deal
    Deal,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Listing => RecordKind::Listing,
            KindArg::Inquiry => RecordKind::Inquiry,
            KindArg::Tripping => RecordKind::Tripping,
            KindArg::Deal => RecordKind::Deal,
        }
    }
}

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Record kind
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Status value, e.g. `pending`
    pub status: String,
}

/// Execute the status command
pub fn execute(args: &StatusArgs, format: OutputFormat) -> AppResult<()> {
    let tone = RecordKind::from(args.kind).tone_of(&args.status)?;

    let status = args.status.trim().to_lowercase();
    let text = match format {
        OutputFormat::Json => {
            output::render_json(&serde_json::json!({ "status": status, "tone": tone }))?
        }
        OutputFormat::Table => output::render_pairs([(status, tone.as_str().to_string())]),
    };
    output::emit(&text);
    Ok(())
}
