//! Navigation classifier: link prefix first, keyword patterns second.

use estatehub_core::config::inbox::{InboxConfig, LinkMatch};
use estatehub_entity::notification::{Notification, RouteBucket};

use super::Classifier;
use super::patterns::ROUTE_PATTERNS;

/// Resolves the sidebar route a notification navigates to.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteClassifier {
    link_match: LinkMatch,
}

impl RouteClassifier {
    /// Creates a classifier with the given link matching mode.
    pub fn new(link_match: LinkMatch) -> Self {
        Self { link_match }
    }

    /// Creates a classifier from the inbox configuration section.
    pub fn from_config(config: &InboxConfig) -> Self {
        Self::new(config.link_match)
    }

    /// Returns the bucket whose route path the link starts with.
    pub fn match_link(&self, link: &str) -> Option<RouteBucket> {
        RouteBucket::ALL
            .into_iter()
            .find(|bucket| self.link_matches(link, bucket.path()))
    }

    /// Returns the first bucket whose keyword pattern matches the text.
    pub fn match_text(&self, text: &str) -> Option<RouteBucket> {
        ROUTE_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(bucket, _)| *bucket)
    }

    fn link_matches(&self, link: &str, path: &str) -> bool {
        let Some(rest) = link.strip_prefix(path) else {
            return false;
        };
        match self.link_match {
            LinkMatch::Prefix => true,
            LinkMatch::Segment => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        }
    }
}

impl Classifier for RouteClassifier {
    fn classify(&self, notification: &Notification) -> Option<RouteBucket> {
        if let Some(link) = notification.link() {
            if let Some(bucket) = self.match_link(link) {
                tracing::trace!(link, %bucket, "Classified notification by link");
                return Some(bucket);
            }
        }

        let bucket = self.match_text(&notification.search_text());
        tracing::trace!(bucket = ?bucket, "Classified notification by text");
        bucket
    }
}
