use std::fmt::Display;

use tint_common::Result;

use crate::{Hex, Hsl, Hsla, Rgb, Rgba};

/// Conversions shared by every color variant.
///
/// Converting never mutates `self`; each method returns a fresh value.
/// Only the conversions that take an alpha can fail, and only when that
/// alpha is outside `[0.0, 1.0]`.
///
/// `alpha: None` keeps the source's own alpha, or `1.0` when the source
/// has none.
pub trait Color: Display {
    fn to_rgb(&self) -> Rgb;

    fn to_rgba(&self, alpha: Option<f64>) -> Result<Rgba>;

    fn to_hex(&self) -> Hex;

    fn to_hsl(&self) -> Hsl;

    fn to_hsla(&self, alpha: Option<f64>) -> Result<Hsla>;
}

/// Alpha given to opaque variants when none is requested.
pub(crate) const OPAQUE: f64 = 1.0;
