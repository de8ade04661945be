//! Channel list rows for the chat sidebar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use estatehub_core::types::{ChannelId, UserId};
use estatehub_entity::channel::Channel;

use super::messages::{last_message, unread_for};
use super::title::title_for;

/// Preview of a channel's latest message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePreview {
    /// Who sent it.
    pub sender_id: UserId,
    /// Message body.
    pub content: String,
    /// When it was sent, if the backend dated it.
    pub created_at: Option<DateTime<Utc>>,
}

/// One row of the channel list as seen by a given user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Channel identifier.
    pub id: ChannelId,
    /// Names of the other members.
    pub title: String,
    /// Subject listing title.
    pub subject_title: String,
    /// Unread message badge.
    pub unread: usize,
    /// Latest message, if any.
    pub last_message: Option<MessagePreview>,
}

impl ChannelSummary {
    /// Builds the summary of `channel` for `user_id`.
    pub fn new(channel: &Channel, user_id: UserId) -> Self {
        Self {
            id: channel.id,
            title: title_for(channel, user_id),
            subject_title: channel.subject_title().to_string(),
            unread: unread_for(channel, user_id),
            last_message: last_message(channel).map(|m| MessagePreview {
                sender_id: m.sender_id,
                content: m.content.clone(),
                created_at: m.created_at,
            }),
        }
    }
}

/// Summaries for every channel, in input order.
pub fn channel_summaries<'a, I>(channels: I, user_id: UserId) -> Vec<ChannelSummary>
where
    I: IntoIterator<Item = &'a Channel>,
{
    channels
        .into_iter()
        .inspect(|c| {
            if !c.has_member(user_id) {
                tracing::warn!(channel_id = %c.id, user_id = %user_id, "Viewer is not a channel member");
            }
        })
        .map(|c| ChannelSummary::new(c, user_id))
        .collect()
}
