//! Integration tests for chat channel aggregation.

mod helpers;

use estatehub_core::types::{ChannelId, MessageId, UserId};
use estatehub_inbox::channel::{
    channel_summaries, filter_channels, last_message, ordered_messages, title_for, unread_for,
};

#[test]
fn test_titles_for_buyer() {
    let payload = helpers::dashboard_payload();
    let buyer = UserId(helpers::BUYER_ID);

    let titles: Vec<String> = payload
        .channels
        .iter()
        .map(|c| title_for(c, buyer))
        .collect();
    assert_eq!(titles, vec!["Maria Agent", "Pedro Broker,Maria Agent", ""]);
}

#[test]
fn test_filter_by_name_and_subject() {
    let payload = helpers::dashboard_payload();

    let ids = |query: &str| -> Vec<ChannelId> {
        filter_channels(&payload.channels, query)
            .iter()
            .map(|c| c.id)
            .collect()
    };

    assert_eq!(ids("pedro"), vec![ChannelId(2)]);
    assert_eq!(ids("TAGAYTAY"), vec![ChannelId(2)]);
    assert_eq!(ids("maria"), vec![ChannelId(1), ChannelId(2)]);
    // The viewer's own name matches every channel.
    assert_eq!(ids("juan").len(), 3);
    assert_eq!(ids("").len(), 3);
    assert!(ids("makati").is_empty());
}

#[test]
fn test_message_order_and_unread() {
    let payload = helpers::dashboard_payload();
    let channel = &payload.channels[0];

    let order: Vec<MessageId> = ordered_messages(channel).iter().map(|m| m.id).collect();
    assert_eq!(order, vec![MessageId(1), MessageId(2), MessageId(3)]);
    assert_eq!(last_message(channel).map(|m| m.id), Some(MessageId(3)));

    assert_eq!(unread_for(channel, UserId(helpers::BUYER_ID)), 2);
    assert_eq!(unread_for(channel, UserId(20)), 0);
}

#[test]
fn test_summaries_for_filtered_channels() {
    let payload = helpers::dashboard_payload();
    let summaries = channel_summaries(
        filter_channels(&payload.channels, "azure"),
        UserId(helpers::BUYER_ID),
    );

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].title, "Maria Agent");
    assert_eq!(summaries[0].subject_title, "Azure Residences 2BR");
    assert_eq!(summaries[0].unread, 2);
    assert_eq!(
        summaries[0].last_message.as_ref().map(|m| m.content.as_str()),
        Some("Yes, one slot.")
    );
}
