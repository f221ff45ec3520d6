//! Serde helpers that carry [`BigInt`] values as canonical decimal strings.
//!
//! JSON numbers lose precision past 2^53 in most consumers, so every exact
//! integer in the JSON surface is a string such as `"-340282366920938463463374607431768211456"`.
//!
//! Use with `#[serde(with = "crate::decimal")]`.

use std::str::FromStr;

use num_bigint::BigInt;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
    let text = String::deserialize(deserializer)?;
    BigInt::from_str(&text).map_err(de::Error::custom)
}
