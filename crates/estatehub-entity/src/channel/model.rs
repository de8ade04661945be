//! Chat channel, member and subject models.

use serde::{Deserialize, Serialize};

use estatehub_core::types::{ChannelId, PropertyId, UserId};

use super::message::Message;
use crate::de::null_as_default;

/// A participant in a chat channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's user ID.
    pub id: UserId,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// The property a channel is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Property identifier.
    #[serde(default)]
    pub id: Option<PropertyId>,
    /// Listing title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Listing description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// A chat channel between buyers, sellers, agents and brokers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique channel identifier.
    pub id: ChannelId,
    /// Participants in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
    /// Property the conversation is about.
    #[serde(default)]
    pub subject: Option<Subject>,
    /// Messages, oldest first as delivered by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<Message>,
}

impl Channel {
    /// Members other than the given user, in array order.
    pub fn other_members(&self, user_id: UserId) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| m.id != user_id)
    }

    /// Check if the given user participates in this channel.
    pub fn has_member(&self, user_id: UserId) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }

    /// Subject listing title, or the empty string when there is no subject.
    pub fn subject_title(&self) -> &str {
        self.subject.as_ref().map(|s| s.title.as_str()).unwrap_or("")
    }
}
