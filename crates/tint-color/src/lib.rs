//! Color value objects and conversions.
//!
//! Five immutable variants ([`Rgb`], [`Rgba`], [`Hex`], [`Hsl`], [`Hsla`])
//! each validate their components on construction, parse and print a
//! canonical string form, and convert into one another through the
//! [`Color`] trait. [`parse`] accepts any of the string forms.
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::{parse, Color, Rgb};
//!
//! let rgb = Rgb::from_string("rgb(55, 155, 255)").unwrap();
//! assert_eq!(rgb.to_hex().to_string(), "#379bff");
//!
//! let any = parse("#379bff").unwrap();
//! assert_eq!(any.to_rgba(Some(0.5)).unwrap().to_string(), "rgba(55,155,255,0.5)");
//! ```

/// `FromStr`, `TryFrom<&str>`, and the `String` conversions serde goes
/// through, all in terms of the type's `from_string` and `Display`.
macro_rules! impl_string_forms {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = tint_common::InvalidColorValue;

            fn from_str(s: &str) -> tint_common::Result<Self> {
                Self::from_string(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = tint_common::InvalidColorValue;

            fn try_from(s: &str) -> tint_common::Result<Self> {
                Self::from_string(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = tint_common::InvalidColorValue;

            fn try_from(s: String) -> tint_common::Result<Self> {
                Self::from_string(&s)
            }
        }

        impl From<$ty> for String {
            fn from(color: $ty) -> String {
                color.to_string()
            }
        }
    };
}

mod color;
mod factory;
mod grammar;
mod hex;
mod hsl;
mod hsla;
mod rgb;
mod rgba;
pub mod validation;

pub use color::Color;
pub use factory::{is_valid_color, parse, AnyColor};
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsla::Hsla;
pub use rgb::Rgb;
pub use rgba::Rgba;
pub use tint_common::{InvalidColorValue, Result};
