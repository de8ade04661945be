//! Sidebar route buckets a notification can be filed under.

use serde::{Deserialize, Serialize};

/// Destination sidebar route for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteBucket {
    /// In-app chat / messages.
    Chat,
    /// Buyer inquiries and leads.
    Inquiries,
    /// Scheduled site visits.
    Trippings,
    /// Offers, reservations and closed deals.
    Deals,
    /// Property listings.
    Properties,
}

impl RouteBucket {
    /// Every bucket, in link-prefix matching order.
    pub const ALL: [RouteBucket; 5] = [
        Self::Chat,
        Self::Inquiries,
        Self::Trippings,
        Self::Deals,
        Self::Properties,
    ];

    /// Return the bucket as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Inquiries => "inquiries",
            Self::Trippings => "trippings",
            Self::Deals => "deals",
            Self::Properties => "properties",
        }
    }

    /// Route path of the bucket's sidebar link.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Chat => "/chat",
            Self::Inquiries => "/inquiries",
            Self::Trippings => "/trippings",
            Self::Deals => "/deals",
            Self::Properties => "/properties",
        }
    }

    /// Whether the sidebar shows an unread badge for this bucket.
    pub fn is_badged(&self) -> bool {
        !matches!(self, Self::Properties)
    }
}

impl std::fmt::Display for RouteBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
