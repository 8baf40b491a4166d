//! Serde helpers for big integers.
//!
//! `num-bigint`'s own serde support writes digit vectors; reports carry
//! secrets as decimal strings instead so any JSON consumer can read them.

/// Serde support for `BigInt` as a decimal string.
pub mod bigint_decimal {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(|e| {
            serde::de::Error::custom(format!("invalid decimal integer {:?}: {}", text, e))
        })
    }
}
