//! Rendering of command results for the terminal.
//!
//! Renderers build the whole text up front and return it, so commands can
//! propagate serialization failures instead of printing partial output.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use estatehub_core::AppResult;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

const EMPTY_ROWS: &str = "(none)";

/// Pretty JSON for any serializable value.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Rows as a table, or as a JSON array.
pub fn render_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => render_json(rows),
        OutputFormat::Table if rows.is_empty() => Ok(EMPTY_ROWS.to_string()),
        OutputFormat::Table => Ok(Table::new(rows).with(Style::rounded()).to_string()),
    }
}

/// A headerless two-column table of labelled values.
pub fn render_pairs<K, V, I>(pairs: I) -> String
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut builder = Builder::default();
    let mut rows = 0usize;
    for (key, value) in pairs {
        builder.push_record([key.into(), value.into()]);
        rows += 1;
    }
    if rows == 0 {
        return EMPTY_ROWS.to_string();
    }
    builder.build().with(Style::blank()).to_string()
}

/// Write rendered output to stdout.
pub fn emit(text: &str) {
    println!("{text}");
}

/// Write an error line to stderr.
pub fn emit_error(msg: &str) {
    eprintln!("error: {msg}");
}

/// Shorten text for a table cell.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}
