//! Listing, inquiry, tripping and deal statuses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use estatehub_core::error::AppError;

use super::tone::{BadgeTone, Badged};

/// Moderation status of a property listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Awaiting broker approval.
    Pending,
    /// Visible to buyers.
    Published,
    /// Refused by the broker.
    Rejected,
    /// Sold and no longer available.
    Sold,
}

impl ListingStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Published => "published",
            Self::Rejected => "rejected",
            Self::Sold => "sold",
        }
    }
}

impl Badged for ListingStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Warning,
            Self::Published => BadgeTone::Success,
            Self::Rejected => BadgeTone::Danger,
            Self::Sold => BadgeTone::Neutral,
        }
    }
}

impl FromStr for ListingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "published" => Ok(Self::Published),
            "rejected" => Ok(Self::Rejected),
            "sold" => Ok(Self::Sold),
            other => Err(AppError::validation(format!(
                "Unknown listing status: '{other}'"
            ))),
        }
    }
}

/// Status of a buyer inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Waiting for the seller or agent.
    Pending,
    /// Accepted by the seller or agent.
    Accepted,
    /// Declined by the seller or agent.
    Rejected,
    /// Withdrawn by the buyer.
    Cancelled,
}

impl InquiryStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Badged for InquiryStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Warning,
            Self::Accepted => BadgeTone::Success,
            Self::Rejected => BadgeTone::Danger,
            Self::Cancelled => BadgeTone::Neutral,
        }
    }
}

impl FromStr for InquiryStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::validation(format!(
                "Unknown inquiry status: '{other}'"
            ))),
        }
    }
}

/// Status of a scheduled site visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrippingStatus {
    /// Requested, not yet confirmed.
    Pending,
    /// Confirmed by the agent.
    Accepted,
    /// Declined by the agent.
    Declined,
    /// The visit took place.
    Completed,
    /// Called off by either side.
    Cancelled,
}

impl TrippingStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Badged for TrippingStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Warning,
            Self::Accepted => BadgeTone::Info,
            Self::Declined => BadgeTone::Danger,
            Self::Completed => BadgeTone::Success,
            Self::Cancelled => BadgeTone::Neutral,
        }
    }
}

impl FromStr for TrippingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::validation(format!(
                "Unknown tripping status: '{other}'"
            ))),
        }
    }
}

/// Status of an offer / deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    /// Offer submitted, awaiting a response.
    Pending,
    /// Offer accepted.
    Accepted,
    /// Seller answered with a counter-offer.
    Countered,
    /// Offer refused.
    Rejected,
    /// Deal closed.
    Completed,
    /// Offer withdrawn.
    Cancelled,
}

impl DealStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Countered => "countered",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Badged for DealStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Warning,
            Self::Accepted => BadgeTone::Success,
            Self::Countered => BadgeTone::Info,
            Self::Rejected => BadgeTone::Danger,
            Self::Completed => BadgeTone::Success,
            Self::Cancelled => BadgeTone::Neutral,
        }
    }
}

impl FromStr for DealStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "countered" => Ok(Self::Countered),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::validation(format!(
                "Unknown deal status: '{other}'"
            ))),
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )+
    };
}

impl_display!(ListingStatus, InquiryStatus, TrippingStatus, DealStatus);
