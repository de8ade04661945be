//! Badge tones used to color status pills.

use serde::{Deserialize, Serialize};

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    /// Gray.
    Neutral,
    /// Blue.
    Info,
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Red.
    Danger,
}

impl BadgeTone {
    /// Return the tone as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for BadgeTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status value that renders as a badge.
pub trait Badged {
    /// Tone of the badge for this status.
    fn tone(&self) -> BadgeTone;
}
