//! Notification classification into sidebar route buckets.
//!
//! Two rule sets exist and are kept deliberately distinct:
//!
//! - [`RouteClassifier`] decides where a notification navigates to. It
//!   anchors the link at the start of the path and falls back to
//!   word-boundary keyword patterns over all five buckets.
//! - [`BadgeClassifier`] decides which sidebar badge a notification bumps.
//!   It matches the link anywhere, falls back to plain substrings, and only
//!   knows the four badged buckets.

pub mod badge;
pub mod patterns;
pub mod route;

pub use badge::BadgeClassifier;
pub use route::RouteClassifier;

use estatehub_entity::notification::{Notification, RouteBucket};

/// Maps a notification to at most one route bucket.
pub trait Classifier {
    /// Classify a notification. `None` means unclassified.
    fn classify(&self, notification: &Notification) -> Option<RouteBucket>;
}

/// Classify with the default route rules (plain prefix link matching).
pub fn classify(notification: &Notification) -> Option<RouteBucket> {
    RouteClassifier::default().classify(notification)
}
