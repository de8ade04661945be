//! # estatehub-inbox
//!
//! Derived view state for the EstateHub dashboards. Provides:
//!
//! - Notification classification into sidebar route buckets
//! - Unread badge counts per sidebar route
//! - Chat channel titles, filtering, ordering and unread badges
//! - Explicit sidebar state
//!
//! Every function here is pure and synchronous. Inputs are borrowed and
//! never mutated; results are re-derived from scratch on each call.

pub mod channel;
pub mod classifier;
pub mod counts;
pub mod sidebar;
pub mod view;

pub use channel::{ChannelSummary, filter_channels, title_for};
pub use classifier::{BadgeClassifier, Classifier, RouteClassifier, classify};
pub use counts::{UnreadCounts, build_counts};
pub use sidebar::SidebarState;
pub use view::{InboxView, PagePayload};
