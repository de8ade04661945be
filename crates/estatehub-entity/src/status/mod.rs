//! Record status enumerations and their badge tones.
//!
//! Each status maps to a [`BadgeTone`] through an exhaustive `match`, so a
//! new status variant does not compile until it is given a tone. Unknown
//! status strings are rejected at parse time.

pub mod record;
pub mod tone;

pub use record::{DealStatus, InquiryStatus, ListingStatus, TrippingStatus};
pub use tone::{BadgeTone, Badged};

use estatehub_core::AppResult;

/// Kind of record a status string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Property listing.
    Listing,
    /// Buyer inquiry.
    Inquiry,
    /// Scheduled site visit.
    Tripping,
    /// Offer / deal.
    Deal,
}

impl RecordKind {
    /// Parse `status` for this record kind and return its badge tone.
    pub fn tone_of(&self, status: &str) -> AppResult<BadgeTone> {
        let tone = match self {
            Self::Listing => status.parse::<ListingStatus>()?.tone(),
            Self::Inquiry => status.parse::<InquiryStatus>()?.tone(),
            Self::Tripping => status.parse::<TrippingStatus>()?.tone(),
            Self::Deal => status.parse::<DealStatus>()?.tone(),
        };
        Ok(tone)
    }
}
