//! Stateless formatting and conversion helpers
//!
//! Pure functions with no network interaction: phone normalization for
//! Bangladeshi numbers, BDT price formatting, JSON validity checks and
//! request-ID generation.

use crate::constants::BD_COUNTRY_CODE;
use crate::error::AppError;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

/// Normalizes a Bangladeshi phone number
///
/// Strips every non-digit character, removes a leading `880` country code when
/// present, and ensures the result starts with `0`.
///
/// # Examples
/// ```
/// use lifeplus_client::utils::format_phone;
/// assert_eq!(format_phone("8801712345678"), "01712345678");
/// assert_eq!(format_phone("+880 1712-345678"), "01712345678");
/// ```
pub fn format_phone(phone: &str) -> String {
    let digits = NON_DIGITS.replace_all(phone, "");
    let national = digits.strip_prefix(BD_COUNTRY_CODE).unwrap_or(&digits);
    if national.starts_with('0') {
        national.to_string()
    } else {
        format!("0{national}")
    }
}

/// Formats an amount in BDT currency
///
/// Two decimal places with thousands separators, optionally prefixed with
/// `BDT `.
///
/// # Examples
/// ```
/// use lifeplus_client::utils::format_price;
/// assert_eq!(format_price(1234.5, true), "BDT 1,234.50");
/// assert_eq!(format_price(1234.5, false), "1,234.50");
/// ```
pub fn format_price(amount: f64, show_currency: bool) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    if show_currency {
        format!("BDT {sign}{grouped}.{dec_part}")
    } else {
        format!("{sign}{grouped}.{dec_part}")
    }
}

/// Checks whether a string is valid JSON
pub fn is_json(input: &str) -> bool {
    serde_json::from_str::<Value>(input).is_ok()
}

/// Converts any serializable value into a plain [`serde_json::Value`] tree
pub fn to_json_value<T: Serialize>(value: &T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(value)?)
}

/// Generates a unique request identifier
///
/// The identifier is a 36-character UUID-v4-shaped string (version nibble `4`,
/// variant nibble in `8`-`b`), used as the `X-Request-ID` header value.
pub fn generate_request_id() -> String {
    let mut rng = rand::rng();
    format!(
        "{:04x}{:04x}-{:04x}-{:04x}-{:04x}-{:04x}{:04x}{:04x}",
        rng.random::<u16>(),
        rng.random::<u16>(),
        rng.random::<u16>(),
        (rng.random::<u16>() & 0x0fff) | 0x4000,
        (rng.random::<u16>() & 0x3fff) | 0x8000,
        rng.random::<u16>(),
        rng.random::<u16>(),
        rng.random::<u16>()
    )
}
