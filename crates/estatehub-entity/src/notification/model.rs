//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured payload attached to a notification by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Path-like link the notification points at, e.g. `/inquiries/42`.
    #[serde(default)]
    pub link: Option<String>,
    /// Notification title.
    #[serde(default)]
    pub title: Option<String>,
    /// Notification body text.
    #[serde(default)]
    pub message: Option<String>,
}

/// A notification delivered to the current user.
///
/// Every field is optional; absent text reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Backend notification identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Structured payload.
    #[serde(default)]
    pub data: Option<NotificationData>,
    /// Top-level title, used when the payload has none.
    #[serde(default)]
    pub title: Option<String>,
    /// Top-level message, used when the payload has none.
    #[serde(default)]
    pub message: Option<String>,
    /// When the notification was read.
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// The notification link, if present and non-empty.
    pub fn link(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.link.as_deref())
            .filter(|link| !link.is_empty())
    }

    /// Title from the payload, falling back to the top-level title.
    pub fn title(&self) -> &str {
        first_non_empty(
            self.data.as_ref().and_then(|d| d.title.as_deref()),
            self.title.as_deref(),
        )
    }

    /// Message from the payload, falling back to the top-level message.
    pub fn message(&self) -> &str {
        first_non_empty(
            self.data.as_ref().and_then(|d| d.message.as_deref()),
            self.message.as_deref(),
        )
    }

    /// Lowercased `title message` used for keyword matching.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title(), self.message()).to_lowercase()
    }

    /// Check if the notification has not been read.
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}

fn first_non_empty<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> &'a str {
    primary
        .filter(|s| !s.is_empty())
        .or(fallback)
        .unwrap_or_default()
}
