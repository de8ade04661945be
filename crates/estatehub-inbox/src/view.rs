//! Derived inbox view for one page render.

use serde::{Deserialize, Serialize};

use estatehub_core::config::AppConfig;
use estatehub_core::types::UserId;
use estatehub_entity::channel::Channel;
use estatehub_entity::de::null_as_default;
use estatehub_entity::notification::{Notification, RouteBucket};

use crate::channel::{ChannelSummary, channel_summaries, filter_channels};
use crate::classifier::{Classifier, RouteClassifier};
use crate::counts::{UnreadCounts, build_unread_counts};
use crate::sidebar::{SidebarLink, SidebarState};

/// The slice of a page-load payload the inbox consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagePayload {
    /// Notifications for the current user.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
    /// Chat channels the current user belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub channels: Vec<Channel>,
}

/// A notification together with the route it navigates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedNotification {
    /// Backend notification identifier.
    pub id: Option<String>,
    /// Display title.
    pub title: String,
    /// Whether it is still unread.
    pub unread: bool,
    /// Destination route, `None` if unclassified.
    pub bucket: Option<RouteBucket>,
}

/// Everything the dashboard chrome needs, derived from one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxView {
    /// Notifications with their routes, in payload order.
    pub notifications: Vec<ClassifiedNotification>,
    /// Unread badge counts.
    pub counts: UnreadCounts,
    /// Channel rows matching the search query, in payload order.
    pub channels: Vec<ChannelSummary>,
    /// Sidebar state.
    pub sidebar: SidebarState,
    /// Sidebar links with badges.
    pub links: Vec<SidebarLink>,
}

impl InboxView {
    /// Derive the view for `user_id`, keeping channels that match `query`.
    pub fn derive(payload: &PagePayload, user_id: UserId, query: &str, config: &AppConfig) -> Self {
        let classifier = RouteClassifier::from_config(&config.inbox);

        let notifications = payload
            .notifications
            .iter()
            .map(|n| ClassifiedNotification {
                id: n.id.clone(),
                title: n.title().to_string(),
                unread: n.is_unread(),
                bucket: classifier.classify(n),
            })
            .collect();

        let counts = build_unread_counts(&payload.notifications);
        let channels = channel_summaries(filter_channels(&payload.channels, query), user_id);
        let sidebar = SidebarState::from_config(&config.sidebar);
        let links = sidebar.links(&counts);

        tracing::debug!(
            user_id = %user_id,
            notifications = payload.notifications.len(),
            channels = channels.len(),
            unread = counts.total(),
            "Derived inbox view"
        );

        Self {
            notifications,
            counts,
            channels,
            sidebar,
            links,
        }
    }
}
