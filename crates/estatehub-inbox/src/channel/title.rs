//! Channel display titles.

use estatehub_core::types::UserId;
use estatehub_entity::channel::Channel;

/// Display title of a channel for the viewing user: the names of every
/// other member, joined with `,` in member order.
///
/// A channel where the viewer is alone yields the empty string.
pub fn title_for(channel: &Channel, current_user_id: UserId) -> String {
    channel
        .other_members(current_user_id)
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
