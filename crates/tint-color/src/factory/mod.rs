//! Format detection for arbitrary color strings.
//!
//! [`parse`] looks at the leading token of a string and hands it to the
//! matching variant parser. Supported notations are `rgb()`, `rgba()`,
//! `#RRGGBB` / `#RGB`, `hsl()` and `hsla()`.


use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::{InvalidColorValue, Result};

use crate::{Color, Hex, Hsl, Hsla, Rgb, Rgba};

/// A color of any supported variant, as produced by [`parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AnyColor {
    Rgb(Rgb),
    Rgba(Rgba),
    Hex(Hex),
    Hsl(Hsl),
    Hsla(Hsla),
}

type Parser = fn(&str) -> Result<AnyColor>;

/// Prefix table, checked in order. `rgba` and `hsla` come before their
/// shorter counterparts. Function names only count when an opening
/// parenthesis follows.
const PARSERS: &[(&str, Parser)] = &[
    ("rgba", parse_rgba),
    ("rgb", parse_rgb),
    ("#", parse_hex),
    ("hsla", parse_hsla),
    ("hsl", parse_hsl),
];

fn parse_rgba(s: &str) -> Result<AnyColor> {
    Rgba::from_string(s).map(AnyColor::Rgba)
}

fn parse_rgb(s: &str) -> Result<AnyColor> {
    Rgb::from_string(s).map(AnyColor::Rgb)
}

fn parse_hex(s: &str) -> Result<AnyColor> {
    Hex::from_string(s).map(AnyColor::Hex)
}

fn parse_hsla(s: &str) -> Result<AnyColor> {
    Hsla::from_string(s).map(AnyColor::Hsla)
}

fn parse_hsl(s: &str) -> Result<AnyColor> {
    Hsl::from_string(s).map(AnyColor::Hsl)
}

/// Parse a color string of any supported notation.
///
/// Surrounding spaces and tabs are ignored. The detected variant's own
/// parser then enforces the full grammar, so `rgb(1,2` is reported as a
/// malformed `rgb` string, while `cmyk(0,0,0,0)` is an unrecognized format.
pub fn parse(s: &str) -> Result<AnyColor> {
    let trimmed = s.trim_matches(|c: char| c == ' ' || c == '\t');

    for &(prefix, parser) in PARSERS {
        if has_prefix(trimmed, prefix) {
            tracing::trace!(prefix, input = s, "detected color format");
            return parser(trimmed);
        }
    }

    tracing::debug!(input = s, "unrecognized color format");
    Err(InvalidColorValue::UnrecognizedFormat(s.to_string()))
}

fn has_prefix(s: &str, prefix: &str) -> bool {
    match s.strip_prefix(prefix) {
        Some(_) if prefix == "#" => true,
        Some(rest) => rest
            .trim_start_matches(|c: char| c == ' ' || c == '\t')
            .starts_with('('),
        None => false,
    }
}

/// Check whether a string parses as any supported color.
pub fn is_valid_color(s: &str) -> bool {
    parse(s).is_ok()
}

impl AnyColor {
    /// Same as [`parse`].
    pub fn from_string(s: &str) -> Result<Self> {
        parse(s)
    }

    /// Alpha of the wrapped color, `None` for the opaque variants.
    pub fn alpha(&self) -> Option<f64> {
        match self {
            AnyColor::Rgba(c) => Some(c.alpha()),
            AnyColor::Hsla(c) => Some(c.alpha()),
            AnyColor::Rgb(_) | AnyColor::Hex(_) | AnyColor::Hsl(_) => None,
        }
    }

    fn as_color(&self) -> &dyn Color {
        match self {
            AnyColor::Rgb(c) => c,
            AnyColor::Rgba(c) => c,
            AnyColor::Hex(c) => c,
            AnyColor::Hsl(c) => c,
            AnyColor::Hsla(c) => c,
        }
    }
}

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_color(), f)
    }
}

impl Color for AnyColor {
    fn to_rgb(&self) -> Rgb {
        self.as_color().to_rgb()
    }

    fn to_rgba(&self, alpha: Option<f64>) -> Result<Rgba> {
        self.as_color().to_rgba(alpha)
    }

    fn to_hex(&self) -> Hex {
        self.as_color().to_hex()
    }

    fn to_hsl(&self) -> Hsl {
        self.as_color().to_hsl()
    }

    fn to_hsla(&self, alpha: Option<f64>) -> Result<Hsla> {
        self.as_color().to_hsla(alpha)
    }
}

impl From<Rgb> for AnyColor {
    fn from(c: Rgb) -> Self {
        AnyColor::Rgb(c)
    }
}

impl From<Rgba> for AnyColor {
    fn from(c: Rgba) -> Self {
        AnyColor::Rgba(c)
    }
}

impl From<Hex> for AnyColor {
    fn from(c: Hex) -> Self {
        AnyColor::Hex(c)
    }
}

impl From<Hsl> for AnyColor {
    fn from(c: Hsl) -> Self {
        AnyColor::Hsl(c)
    }
}

impl From<Hsla> for AnyColor {
    fn from(c: Hsla) -> Self {
        AnyColor::Hsla(c)
    }
}

impl_string_forms!(AnyColor);
