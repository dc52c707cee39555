use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::Result;

use crate::color::Color;
use crate::grammar::{self, RGBA_RE};
use crate::validation::{validate_alpha, validate_channel};
use crate::{Hex, Hsl, Hsla, Rgb};

/// Three 8-bit channels plus an alpha in `[0.0, 1.0]`, `rgba(R,G,B,A)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Rgba {
    pub fn new(red: i64, green: i64, blue: i64, alpha: f64) -> Result<Self> {
        Ok(Self {
            red: validate_channel("red", red)?,
            green: validate_channel("green", green)?,
            blue: validate_channel("blue", blue)?,
            alpha: validate_alpha(alpha)?,
        })
    }

    /// Channels are already known to be valid; only the alpha is checked.
    pub(crate) fn from_channels(red: u8, green: u8, blue: u8, alpha: f64) -> Result<Self> {
        Ok(Self {
            red,
            green,
            blue,
            alpha: validate_alpha(alpha)?,
        })
    }

    /// Parse `rgba(R,G,B,A)`, tolerating spaces and tabs between tokens.
    pub fn from_string(s: &str) -> Result<Self> {
        let [red, green, blue, alpha] = grammar::match_function::<4>(&RGBA_RE, "rgba", s)?;
        Self::new(
            grammar::parse_integer("red", red)?,
            grammar::parse_integer("green", green)?,
            grammar::parse_integer("blue", blue)?,
            grammar::parse_float("rgba", s, alpha)?,
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

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl Color for Rgba {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(self.red, self.green, self.blue)
    }

    fn to_rgba(&self, alpha: Option<f64>) -> Result<Rgba> {
        Self::from_channels(self.red, self.green, self.blue, alpha.unwrap_or(self.alpha))
    }

    fn to_hex(&self) -> Hex {
        Hex::from_channels(self.red, self.green, self.blue)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from_channels(self.red, self.green, self.blue)
    }

    fn to_hsla(&self, alpha: Option<f64>) -> Result<Hsla> {
        Hsla::from_channels(self.red, self.green, self.blue, alpha.unwrap_or(self.alpha))
    }
}

impl_string_forms!(Rgba);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Rgba {
        Rgba::new(55, 155, 255, 0.5).unwrap()
    }

    #[test]
    fn new_stores_channels() {
        let rgba = sample();
        assert_eq!(rgba.red(), 55);
        assert_eq!(rgba.green(), 155);
        assert_eq!(rgba.blue(), 255);
        assert_eq!(rgba.alpha(), 0.5);
    }

    #[test]
    fn new_rejects_bad_components() {
        assert!(Rgba::new(-5, 255, 255, 0.5).is_err());
        assert!(Rgba::new(55, 300, 255, 0.5).is_err());
        assert!(Rgba::new(55, 155, 255, 1.1).is_err());
        assert!(Rgba::new(55, 155, 255, -0.1).is_err());
        assert!(Rgba::new(55, 155, 255, f64::NAN).is_err());
    }

    #[test]
    fn from_string() {
        assert_eq!(Rgba::from_string("rgba(55,155,255,0.5)").unwrap(), sample());
    }

    #[test]
    fn from_string_with_spaces() {
        let rgba = Rgba::from_string(" \trgba( 55 , 155 ,\t255 , 0.5 ) ").unwrap();
        assert_eq!(rgba, sample());
    }

    #[test]
    fn from_string_accepts_integer_and_bare_fraction_alpha() {
        assert_eq!(Rgba::from_string("rgba(0,0,0,1)").unwrap().alpha(), 1.0);
        assert_eq!(Rgba::from_string("rgba(0,0,0,.25)").unwrap().alpha(), 0.25);
    }

    #[test]
    fn from_string_rejects_malformed() {
        assert!(Rgba::from_string("rgba(55,155,255,0.5").is_err());
        assert!(Rgba::from_string("rgba(55,155,255)").is_err());
        assert!(Rgba::from_string("rgb(55,155,255,0.5)").is_err());
        assert!(Rgba::from_string("x rgba(55,155,255,0.5)").is_err());
        assert!(Rgba::from_string("rgba(55,155,255,2)").is_err());
    }

    #[test]
    fn display_uses_shortest_alpha() {
        assert_eq!(sample().to_string(), "rgba(55,155,255,0.5)");
        assert_eq!(Rgba::new(1, 2, 3, 1.0).unwrap().to_string(), "rgba(1,2,3,1)");
        assert_eq!(Rgba::new(1, 2, 3, 0.0).unwrap().to_string(), "rgba(1,2,3,0)");
    }

    #[test]
    fn display_never_prints_negative_zero() {
        assert_eq!(Rgba::new(1, 2, 3, -0.0).unwrap().to_string(), "rgba(1,2,3,0)");
        assert_eq!(Rgba::from_string("rgba(1,2,3,-0)").unwrap().to_string(), "rgba(1,2,3,0)");
    }

    #[test]
    fn display_round_trips() {
        let rgba = Rgba::new(10, 20, 30, 0.125).unwrap();
        assert_eq!(Rgba::from_string(&rgba.to_string()).unwrap(), rgba);
    }

    #[test]
    fn to_rgb_drops_alpha() {
        assert_eq!(sample().to_rgb(), Rgb::new(55, 155, 255).unwrap());
    }

    #[test]
    fn to_rgba_copies_or_overrides_alpha() {
        assert_eq!(sample().to_rgba(None).unwrap(), sample());
        assert_eq!(sample().to_rgba(Some(0.25)).unwrap().alpha(), 0.25);
        assert!(sample().to_rgba(Some(3.0)).is_err());
    }

    #[test]
    fn to_hex_discards_alpha() {
        assert_eq!(sample().to_hex().to_string(), "#379bff");
    }

    #[test]
    fn to_hsl_and_hsla() {
        let hsl = sample().to_hsl();
        assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (55, 155, 255));

        let hsla = sample().to_hsla(None).unwrap();
        assert_eq!(hsla.alpha(), 0.5);
        let hsla = sample().to_hsla(Some(0.75)).unwrap();
        assert_eq!(hsla.alpha(), 0.75);
    }
}
