use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::Result;

use crate::color::Color;
use crate::grammar;
use crate::validation::validate_hex_pair;
use crate::{Hsl, Hsla, Rgb, Rgba};

/// An opaque color as three two-digit hexadecimal pairs, `#rrggbb`.
///
/// Pairs are stored lowercase, so `Hex::new("FF", ..)` and
/// `Hex::new("ff", ..)` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex {
    red: String,
    green: String,
    blue: String,
}

impl Hex {
    /// Each argument must be exactly two hex digits, in either case.
    pub fn new(red: &str, green: &str, blue: &str) -> Result<Self> {
        Ok(Self {
            red: validate_hex_pair(red)?,
            green: validate_hex_pair(green)?,
            blue: validate_hex_pair(blue)?,
        })
    }

    pub(crate) fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: format!("{red:02x}"),
            green: format!("{green:02x}"),
            blue: format!("{blue:02x}"),
        }
    }

    /// Parse `#RRGGBB` or the `#RGB` shorthand.
    pub fn from_string(s: &str) -> Result<Self> {
        let [red, green, blue] = grammar::split_hex(s)?;
        Self::new(&red, &green, &blue)
    }

    pub fn red(&self) -> &str {
        &self.red
    }

    pub fn green(&self) -> &str {
        &self.green
    }

    pub fn blue(&self) -> &str {
        &self.blue
    }
}

/// Decode a pair checked by [`validate_hex_pair`].
fn decode(pair: &str) -> u8 {
    u8::from_str_radix(pair, 16).unwrap_or_default()
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{}{}", self.red, self.green, self.blue)
    }
}

impl Color for Hex {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(decode(&self.red), decode(&self.green), decode(&self.blue))
    }

    fn to_rgba(&self, alpha: Option<f64>) -> Result<Rgba> {
        self.to_rgb().to_rgba(alpha)
    }

    fn to_hex(&self) -> Hex {
        self.clone()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_hsla(&self, alpha: Option<f64>) -> Result<Hsla> {
        self.to_rgb().to_hsla(alpha)
    }
}

impl_string_forms!(Hex);
