use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::Result;

use crate::color::{Color, OPAQUE};
use crate::grammar::{self, RGB_RE};
use crate::validation::validate_channel;
use crate::{Hex, Hsl, Hsla, Rgba};

/// An opaque color as three 8-bit channels, `rgb(R,G,B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Each channel must be in `[0, 255]`.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self> {
        Ok(Self {
            red: validate_channel("red", red)?,
            green: validate_channel("green", green)?,
            blue: validate_channel("blue", blue)?,
        })
    }

    pub(crate) fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `rgb(R,G,B)`, tolerating spaces and tabs between tokens.
    pub fn from_string(s: &str) -> Result<Self> {
        let [red, green, blue] = grammar::match_function::<3>(&RGB_RE, "rgb", s)?;
        Self::new(
            grammar::parse_integer("red", red)?,
            grammar::parse_integer("green", green)?,
            grammar::parse_integer("blue", blue)?,
        )
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl Color for Rgb {
    fn to_rgb(&self) -> Rgb {
        Self::from_channels(self.red, self.green, self.blue)
    }

    fn to_rgba(&self, alpha: Option<f64>) -> Result<Rgba> {
        Rgba::from_channels(self.red, self.green, self.blue, alpha.unwrap_or(OPAQUE))
    }

    fn to_hex(&self) -> Hex {
        Hex::from_channels(self.red, self.green, self.blue)
    }

    // Channels are carried over positionally; no color-space transform.
    fn to_hsl(&self) -> Hsl {
        Hsl::from_channels(self.red, self.green, self.blue)
    }

    fn to_hsla(&self, alpha: Option<f64>) -> Result<Hsla> {
        Hsla::from_channels(self.red, self.green, self.blue, alpha.unwrap_or(OPAQUE))
    }
}

impl_string_forms!(Rgb);
