//! Deserialization helpers for loosely-typed backend payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a field whose JSON value may be `null`, reading `null` as
/// `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent field defaults as well.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
