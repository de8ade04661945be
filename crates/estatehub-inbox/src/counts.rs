//! Unread badge counts per sidebar route.

use serde::{Deserialize, Serialize};

use estatehub_entity::notification::{Notification, RouteBucket};

use crate::classifier::{BadgeClassifier, Classifier};

/// Badge counts for the four badged sidebar routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCounts {
    /// Chat / messages.
    pub chat: u32,
    /// Inquiries.
    pub inquiries: u32,
    /// Trippings.
    pub trippings: u32,
    /// Deals.
    pub deals: u32,
}

impl UnreadCounts {
    /// Count for a bucket. Untracked buckets always read zero.
    pub fn get(&self, bucket: RouteBucket) -> u32 {
        match bucket {
            RouteBucket::Chat => self.chat,
            RouteBucket::Inquiries => self.inquiries,
            RouteBucket::Trippings => self.trippings,
            RouteBucket::Deals => self.deals,
            RouteBucket::Properties => 0,
        }
    }

    /// Sum over all buckets, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.chat
            .saturating_add(self.inquiries)
            .saturating_add(self.trippings)
            .saturating_add(self.deals)
    }

    fn increment(&mut self, bucket: RouteBucket) {
        let slot = match bucket {
            RouteBucket::Chat => &mut self.chat,
            RouteBucket::Inquiries => &mut self.inquiries,
            RouteBucket::Trippings => &mut self.trippings,
            RouteBucket::Deals => &mut self.deals,
            RouteBucket::Properties => return,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Tally notifications with an arbitrary classifier.
///
/// Each notification bumps at most one bucket.
pub fn build_counts_with<'a, C, I>(classifier: &C, notifications: I) -> UnreadCounts
where
    C: Classifier + ?Sized,
    I: IntoIterator<Item = &'a Notification>,
{
    let mut counts = UnreadCounts::default();
    let mut seen = 0usize;
    for notification in notifications {
        seen += 1;
        if let Some(bucket) = classifier.classify(notification) {
            counts.increment(bucket);
        }
    }
    tracing::debug!(seen, counted = counts.total(), "Built sidebar counts");
    counts
}

/// Tally every given notification with the badge rules.
pub fn build_counts(notifications: &[Notification]) -> UnreadCounts {
    build_counts_with(&BadgeClassifier, notifications)
}

/// Tally only the unread notifications with the badge rules.
pub fn build_unread_counts(notifications: &[Notification]) -> UnreadCounts {
    build_counts_with(
        &BadgeClassifier,
        notifications.iter().filter(|n| n.is_unread()),
    )
}
