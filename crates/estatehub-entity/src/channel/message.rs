//! Chat message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use estatehub_core::types::{MessageId, UserId};

use crate::de::null_as_default;

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// The user who sent the message.
    pub sender_id: UserId,
    /// Message body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// When the message was sent. Undated messages sort first.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the recipient read the message.
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Whether this message counts as unread for the given user.
    ///
    /// A user's own messages are never unread for them.
    pub fn is_unread_for(&self, user_id: UserId) -> bool {
        self.sender_id != user_id && self.read_at.is_none()
    }
}
