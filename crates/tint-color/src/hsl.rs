use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::Result;

use crate::color::{Color, OPAQUE};
use crate::grammar::{self, HSL_RE};
use crate::validation::validate_channel;
use crate::{Hex, Hsla, Rgb, Rgba};

/// An opaque color in `hsl(H,S,L)` notation.
///
/// The three components share the `[0, 255]` range of an RGB channel and
/// convert to and from the other variants position by position: hue pairs
/// with red, saturation with green, lightness with blue. No HSL color-space
/// math is applied, which is why the positional `red`/`green`/`blue`
/// accessors exist alongside the named ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hsl {
    hue: u8,
    saturation: u8,
    lightness: u8,
}

impl Hsl {
    pub fn new(hue: i64, saturation: i64, lightness: i64) -> Result<Self> {
        Ok(Self {
            hue: validate_channel("hue", hue)?,
            saturation: validate_channel("saturation", saturation)?,
            lightness: validate_channel("lightness", lightness)?,
        })
    }

    pub(crate) fn from_channels(hue: u8, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn from_string(s: &str) -> Result<Self> {
        let [hue, saturation, lightness] = grammar::match_function::<3>(&HSL_RE, "hsl", s)?;
        Self::new(
            grammar::parse_integer("hue", hue)?,
            grammar::parse_integer("saturation", saturation)?,
            grammar::parse_integer("lightness", lightness)?,
        )
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    pub fn red(&self) -> u8 {
        self.hue
    }

    pub fn green(&self) -> u8 {
        self.saturation
    }

    pub fn blue(&self) -> u8 {
        self.lightness
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{},{})", self.hue, self.saturation, self.lightness)
    }
}

impl Color for Hsl {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(self.hue, self.saturation, self.lightness)
    }

    fn to_rgba(&self, alpha: Option<f64>) -> Result<Rgba> {
        Rgba::from_channels(
            self.hue,
            self.saturation,
            self.lightness,
            alpha.unwrap_or(OPAQUE),
        )
    }

    fn to_hex(&self) -> Hex {
        Hex::from_channels(self.hue, self.saturation, self.lightness)
    }

    fn to_hsl(&self) -> Hsl {
        Self::from_channels(self.hue, self.saturation, self.lightness)
    }

    fn to_hsla(&self, alpha: Option<f64>) -> Result<Hsla> {
        Hsla::from_channels(
            self.hue,
            self.saturation,
            self.lightness,
            alpha.unwrap_or(OPAQUE),
        )
    }
}

impl_string_forms!(Hsl);
