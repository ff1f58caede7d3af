//! Serde adapters for lenient API payloads
//!
//! The platform occasionally serializes numbers as strings and uses empty
//! strings where `null` is meant. These adapters normalize both on the way in.

use serde::{Deserialize, Deserializer, Serializer};

/// Deserializes an optional float that may arrive as a number, a string or null
///
/// Use with `#[serde(with = "string_as_float_opt")]`.
pub mod string_as_float_opt {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(NumberOrString::Number(v)) => Some(v),
            Some(NumberOrString::String(s)) if s.trim().is_empty() => None,
            Some(NumberOrString::String(s)) => s.trim().parse::<f64>().ok(),
            None => None,
        })
    }
}

/// Deserializes an optional string, mapping empty strings to `None`
pub fn option_string_empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}
