//! Shared range-validation helpers used by every color constructor.

use tint_common::{InvalidColorValue, Result};

/// Inclusive bounds of an integer channel.
pub const CHANNEL_MIN: i64 = 0;
pub const CHANNEL_MAX: i64 = 255;

/// Inclusive bounds of an alpha channel.
pub const ALPHA_MIN: f64 = 0.0;
pub const ALPHA_MAX: f64 = 1.0;

/// Accept `value` if it is inside `[0, 255]`.
pub fn validate_channel(component: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        InvalidColorValue::out_of_range(component, value, CHANNEL_MIN, CHANNEL_MAX)
    })
}

/// Accept `value` if it is inside `[0.0, 1.0]`. NaN is rejected and
/// `-0.0` comes back as `0.0`.
pub fn validate_alpha(value: f64) -> Result<f64> {
    if (ALPHA_MIN..=ALPHA_MAX).contains(&value) {
        Ok(value.abs())
    } else {
        Err(InvalidColorValue::out_of_range(
            "alpha", value, ALPHA_MIN, ALPHA_MAX,
        ))
    }
}

/// Accept exactly two hexadecimal digits, returned lowercased.
pub fn validate_hex_pair(value: &str) -> Result<String> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(InvalidColorValue::MalformedHex(value.to_string()))
    }
}
