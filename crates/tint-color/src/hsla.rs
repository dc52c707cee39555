use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::Result;

use crate::color::Color;
use crate::grammar::{self, HSLA_RE};
use crate::validation::{validate_alpha, validate_channel};
use crate::{Hex, Hsl, Rgb, Rgba};

/// [`Hsl`] with an alpha in `[0.0, 1.0]`, `hsla(H,S,L,A)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hsla {
    hue: u8,
    saturation: u8,
    lightness: u8,
    alpha: f64,
}

impl Hsla {
    pub fn new(hue: i64, saturation: i64, lightness: i64, alpha: f64) -> Result<Self> {
        Ok(Self {
            hue: validate_channel("hue", hue)?,
            saturation: validate_channel("saturation", saturation)?,
            lightness: validate_channel("lightness", lightness)?,
            alpha: validate_alpha(alpha)?,
        })
    }

    pub(crate) fn from_channels(
        hue: u8,
        saturation: u8,
        lightness: u8,
        alpha: f64,
    ) -> Result<Self> {
        Ok(Self {
            hue,
            saturation,
            lightness,
            alpha: validate_alpha(alpha)?,
        })
    }

    pub fn from_string(s: &str) -> Result<Self> {
        let [hue, saturation, lightness, alpha] =
            grammar::match_function::<4>(&HSLA_RE, "hsla", s)?;
        Self::new(
            grammar::parse_integer("hue", hue)?,
            grammar::parse_integer("saturation", saturation)?,
            grammar::parse_integer("lightness", lightness)?,
            grammar::parse_float("hsla", s, alpha)?,
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

    pub fn alpha(&self) -> f64 {
        self.alpha
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

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{},{},{})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

impl Color for Hsla {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(self.hue, self.saturation, self.lightness)
    }

    fn to_rgba(&self, alpha: Option<f64>) -> Result<Rgba> {
        Rgba::from_channels(
            self.hue,
            self.saturation,
            self.lightness,
            alpha.unwrap_or(self.alpha),
        )
    }

    fn to_hex(&self) -> Hex {
        Hex::from_channels(self.hue, self.saturation, self.lightness)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from_channels(self.hue, self.saturation, self.lightness)
    }

    fn to_hsla(&self, alpha: Option<f64>) -> Result<Hsla> {
        Self::from_channels(
            self.hue,
            self.saturation,
            self.lightness,
            alpha.unwrap_or(self.alpha),
        )
    }
}

impl_string_forms!(Hsla);
