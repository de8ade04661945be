//! Per-user message ordering and unread badges.

use estatehub_core::types::UserId;
use estatehub_entity::channel::{Channel, Message};

/// Messages in chronological order. Undated messages come first; messages
/// sharing a timestamp keep their delivery order.
pub fn ordered_messages(channel: &Channel) -> Vec<&Message> {
    let mut messages: Vec<&Message> = channel.messages.iter().collect();
    messages.sort_by_key(|m| m.created_at);
    messages
}

/// The most recent message, if any.
pub fn last_message(channel: &Channel) -> Option<&Message> {
    channel.messages.iter().max_by_key(|m| m.created_at)
}

/// Number of messages in the channel that are unread for `user_id`.
pub fn unread_for(channel: &Channel, user_id: UserId) -> usize {
    channel
        .messages
        .iter()
        .filter(|m| m.is_unread_for(user_id))
        .count()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use estatehub_core::types::{ChannelId, MessageId};

    use super::*;

    fn message(id: i64, sender: i64, minute: u32, read: bool) -> Message {
        Message {
            id: MessageId(id),
            sender_id: UserId(sender),
            content: format!("message {id}"),
            created_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, minute, 0).unwrap()),
            read_at: read.then(Utc::now),
        }
    }

    fn channel(messages: Vec<Message>) -> Channel {
        Channel {
            id: ChannelId(1),
            members: Vec::new(),
            subject: None,
            messages,
        }
    }

    #[test]
    fn test_ordering_is_chronological_and_stable() {
        let c = channel(vec![
            message(1, 2, 30, true),
            message(2, 1, 10, true),
            message(3, 2, 30, true),
            message(4, 2, 5, true),
        ]);
        let ids: Vec<i64> = ordered_messages(&c).iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
        // Input untouched.
        assert_eq!(c.messages[0].id, MessageId(1));
    }

    #[test]
    fn test_last_message_prefers_later_delivery_on_tie() {
        let c = channel(vec![message(1, 2, 30, true), message(2, 1, 30, true)]);
        assert_eq!(last_message(&c).map(|m| m.id), Some(MessageId(2)));
        assert!(last_message(&channel(Vec::new())).is_none());
    }

    #[test]
    fn test_unread_excludes_own_and_read_messages() {
        let c = channel(vec![
            message(1, 2, 1, false),
            message(2, 2, 2, true),
            message(3, 1, 3, false),
            message(4, 3, 4, false),
        ]);
        assert_eq!(unread_for(&c, UserId(1)), 2);
        assert_eq!(unread_for(&c, UserId(2)), 2);
    }

    #[test]
    fn test_undated_messages_sort_first() {
        let mut undated = message(5, 2, 0, true);
        undated.created_at = None;
        let c = channel(vec![message(1, 2, 30, true), undated]);

        let ids: Vec<i64> = ordered_messages(&c).iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![5, 1]);
        assert_eq!(last_message(&c).map(|m| m.id), Some(MessageId(1)));
    }
}
