//! # estatehub-entity
//!
//! Domain records for EstateHub as delivered by the backend page payload.
//! Every struct in this crate derives `Debug`, `Clone`, `Serialize` and
//! `Deserialize`, and tolerates missing or `null` optional fields.

pub mod channel;
pub mod de;
pub mod notification;
pub mod status;
