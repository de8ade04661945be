//! Inbox classification and sidebar configuration.

use serde::{Deserialize, Serialize};

/// How a notification link is matched against a route path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMatch {
    /// Plain `starts_with`: `/inquiries-archive/5` matches `/inquiries`.
    #[default]
    Prefix,
    /// The route path must end at a segment boundary (`/`, `?`, `#` or end).
    Segment,
}

/// Notification classification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboxConfig {
    /// Link matching mode used by the route classifier.
    #[serde(default)]
    pub link_match: LinkMatch,
}

/// Initial sidebar state handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Whether the sidebar starts expanded.
    #[serde(default = "default_true")]
    pub open: bool,
    /// Sidebar sections that start collapsed.
    #[serde(default)]
    pub collapsed: Vec<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            open: true,
            collapsed: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
