//! Chat channel aggregation: titles, filtering, ordering and unread badges.

pub mod filter;
pub mod messages;
pub mod summary;
pub mod title;

pub use filter::filter_channels;
pub use messages::{last_message, ordered_messages, unread_for};
pub use summary::{ChannelSummary, MessagePreview, channel_summaries};
pub use title::title_for;
