//! Free-text channel search.

use estatehub_entity::channel::Channel;

/// Channels matching `query`, in their original order.
///
/// Matching is a case-insensitive substring test against the space-joined
/// names of *all* members (the viewer included) and against the subject
/// title. An empty query matches every channel.
pub fn filter_channels<'a>(channels: &'a [Channel], query: &str) -> Vec<&'a Channel> {
    if query.is_empty() {
        return channels.iter().collect();
    }

    let needle = query.to_lowercase();
    let matched: Vec<&Channel> = channels
        .iter()
        .filter(|channel| matches(channel, &needle))
        .collect();

    tracing::debug!(
        query,
        total = channels.len(),
        matched = matched.len(),
        "Filtered channels"
    );
    matched
}

fn matches(channel: &Channel, needle: &str) -> bool {
    let names = channel
        .members
        .iter()
        .map(|m| m.name.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    names.contains(needle) || channel.subject_title().to_lowercase().contains(needle)
}
