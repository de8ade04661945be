//! Notification domain entities.

pub mod bucket;
pub mod model;

pub use bucket::RouteBucket;
pub use model::{Notification, NotificationData};
