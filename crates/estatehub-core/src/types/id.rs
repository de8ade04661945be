//! Newtype wrappers around the backend's integer primary keys.
//!
//! Using distinct types prevents accidentally passing a `ChannelId` where a
//! `UserId` is expected. Each ID serializes transparently as a JSON number.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Return the inner integer value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user (buyer, seller, agent or broker).
    UserId
);

define_id!(
    /// Unique identifier for a chat channel.
    ChannelId
);

define_id!(
    /// Unique identifier for a chat message.
    MessageId
);

define_id!(
    /// Unique identifier for a property listing.
    PropertyId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(42).to_string(), "42");
    }

    #[test]
    fn test_user_id_from_str() {
        let id: UserId = " 7 ".parse().expect("should parse");
        assert_eq!(id, UserId(7));
        assert!("seven".parse::<UserId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ChannelId(3)).expect("serialize");
        assert_eq!(json, "3");
        let parsed: ChannelId = serde_json::from_str("3").expect("deserialize");
        assert_eq!(parsed, ChannelId(3));
    }
}
