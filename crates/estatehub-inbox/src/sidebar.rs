//! Explicit sidebar state.
//!
//! The dashboard sidebar's open/collapsed flags are plain values owned by
//! the caller. They start from configuration and are serializable so the
//! caller decides where they persist.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use estatehub_core::config::inbox::SidebarConfig;
use estatehub_entity::notification::RouteBucket;

use crate::counts::UnreadCounts;

/// Open/collapse state of the dashboard sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    /// Whether the sidebar is expanded.
    pub open: bool,
    /// Names of collapsed sections.
    pub collapsed: BTreeSet<String>,
}

/// A sidebar navigation link with its badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Route bucket the link leads to.
    pub bucket: RouteBucket,
    /// Route path.
    pub path: String,
    /// Unread badge; zero hides the badge.
    pub badge: u32,
}

impl SidebarState {
    /// Initial state from configuration.
    pub fn from_config(config: &SidebarConfig) -> Self {
        Self {
            open: config.open,
            collapsed: config.collapsed.iter().cloned().collect(),
        }
    }

    /// Flip the sidebar between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Flip a section's collapsed flag. Returns whether it is now collapsed.
    pub fn toggle_section(&mut self, section: &str) -> bool {
        if self.collapsed.remove(section) {
            false
        } else {
            self.collapsed.insert(section.to_string());
            true
        }
    }

    /// Check if a section is collapsed.
    pub fn is_collapsed(&self, section: &str) -> bool {
        self.collapsed.contains(section)
    }

    /// Navigation links for every route with their badges.
    pub fn links(&self, counts: &UnreadCounts) -> Vec<SidebarLink> {
        RouteBucket::ALL
            .into_iter()
            .map(|bucket| SidebarLink {
                bucket,
                path: bucket.path().to_string(),
                badge: counts.get(bucket),
            })
            .collect()
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::from_config(&SidebarConfig::default())
    }
}
