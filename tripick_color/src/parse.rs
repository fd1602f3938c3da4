// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color text parsing and the [`ColorSpec`] input type.
//!
//! Hex colors (`rgb`, `rgba`, `rrggbb`, `rrggbbaa`, with or without `#`) are
//! read directly; alpha is accepted and discarded. With the `std` feature,
//! everything else goes through [`csscolorparser`]: CSS color names,
//! `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hsv()`/`hsva()`, `hwb()` and the other
//! functional forms it knows. Without `std` only hex is understood.
//!
//! Case and surrounding whitespace are ignored. Text colors pass through 8-bit
//! RGB, so a grey or black has hue `0`.

use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::{Hsv, Rgb};

/// Error returned when color text cannot be understood.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input was empty or whitespace.
    #[error("empty color string")]
    Empty,
    /// A hex color had the wrong length or a non-hex digit.
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    /// Text that is not a color this build understands.
    #[error("unrecognized color `{input}`: {reason}")]
    Unrecognized {
        /// The trimmed input.
        input: String,
        /// What the CSS parser reported.
        reason: String,
    },
}

fn parse_hex(digits: &str) -> Result<Rgb, ParseColorError> {
    let invalid = || ParseColorError::InvalidHex(digits.to_string());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |range: core::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(invalid)
    };
    match digits.len() {
        3 | 4 => Ok(Rgb::new(
            byte(0..1)? * 17,
            byte(1..2)? * 17,
            byte(2..3)? * 17,
        )),
        6 | 8 => Ok(Rgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        _ => Err(invalid()),
    }
}

fn is_bare_hex(text: &str) -> bool {
    matches!(text.len(), 3 | 4 | 6 | 8) && text.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(feature = "std")]
fn parse_css(text: &str) -> Result<Rgb, ParseColorError> {
    let color = csscolorparser::parse(text).map_err(|err| ParseColorError::Unrecognized {
        input: text.to_string(),
        reason: err.to_string(),
    })?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(Rgb::new(r, g, b))
}

#[cfg(not(feature = "std"))]
fn parse_css(text: &str) -> Result<Rgb, ParseColorError> {
    Err(ParseColorError::Unrecognized {
        input: text.to_string(),
        reason: "only hex colors are supported without `std`".to_string(),
    })
}

impl FromStr for Hsv {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Rgb>().map(|rgb| rgb.to_hsv())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if let Some(digits) = text.strip_prefix('#') {
            return parse_hex(digits);
        }
        if is_bare_hex(text) {
            return parse_hex(text);
        }
        parse_css(text)
    }
}

/// A color as supplied by a host: already-structured, or text to parse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpec<'a> {
    /// An HSV color, used as is.
    Hsv(Hsv),
    /// An RGB color, converted to HSV.
    Rgb(Rgb),
    /// Color text: hex, or (with `std`) any CSS color.
    Text(&'a str),
}

impl ColorSpec<'_> {
    /// Resolve to HSV, reporting unparsable text as an error.
    pub fn try_resolve(self) -> Result<Hsv, ParseColorError> {
        match self {
            Self::Hsv(hsv) => Ok(hsv),
            Self::Rgb(rgb) => Ok(rgb.to_hsv()),
            Self::Text(text) => text.parse(),
        }
    }

    /// Resolve to HSV, substituting [`Hsv::BLACK`] for unparsable text.
    pub fn resolve(self) -> Hsv {
        self.try_resolve().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to black");
            Hsv::BLACK
        })
    }
}

impl From<Hsv> for ColorSpec<'_> {
    fn from(hsv: Hsv) -> Self {
        Self::Hsv(hsv)
    }
}

impl From<Rgb> for ColorSpec<'_> {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl<'a> From<&'a str> for ColorSpec<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ColorSpec<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(text: &str) -> Rgb {
        text.parse().expect("color should parse")
    }

    #[test]
    fn hex_forms() {
        assert_eq!(rgb("#3b82f6"), Rgb::new(59, 130, 246));
        assert_eq!(rgb("3B82F6"), Rgb::new(59, 130, 246));
        assert_eq!(rgb("#f0a"), Rgb::new(255, 0, 170));
        assert_eq!(rgb("#f0a8"), Rgb::new(255, 0, 170));
        assert_eq!(rgb("  #3b82f680 "), Rgb::new(59, 130, 246));
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!(
            "#12345".parse::<Hsv>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<Hsv>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert_eq!("   ".parse::<Hsv>(), Err(ParseColorError::Empty));
    }

    #[cfg(feature = "std")]
    #[test]
    fn css_names() {
        assert_eq!(rgb("orange").to_hex(), "#ffa500");
        assert_eq!(rgb("Teal"), Rgb::new(0, 128, 128));
        assert_eq!(rgb("coral"), Rgb::new(255, 127, 80));
        assert_eq!(rgb("rebeccapurple"), Rgb::new(102, 51, 153));
        assert_eq!(rgb("hotpink"), Rgb::new(255, 105, 180));
        assert_eq!(rgb("grey"), rgb("gray"));
        assert_eq!(rgb("transparent"), Rgb::new(0, 0, 0));
    }

    #[cfg(feature = "std")]
    #[test]
    fn functional_forms() {
        assert_eq!(rgb("rgb(59, 130, 246)"), Rgb::new(59, 130, 246));
        assert_eq!(rgb("RGBA(59,130,246,0.5)"), Rgb::new(59, 130, 246));
        assert_eq!(rgb("hsl(120, 100%, 50%)"), Rgb::new(0, 255, 0));

        let c: Hsv = "hsv(217, 76%, 96%)".parse().expect("hsv should parse");
        assert!((c.h() - 217.0).abs() < 1.0, "{c:?}");
        assert!((c.s() - 0.76).abs() < 0.01, "{c:?}");
        assert!((c.v() - 0.96).abs() < 0.01, "{c:?}");
    }

    #[cfg(feature = "std")]
    #[test]
    fn unknown_text_is_unrecognized() {
        for text in ["chartreuse-ish", "rgb(1, 2)", "cmyk(1, 2, 3, 4)"] {
            assert!(
                matches!(
                    text.parse::<Hsv>(),
                    Err(ParseColorError::Unrecognized { .. })
                ),
                "{text}"
            );
        }
    }

    #[cfg(not(feature = "std"))]
    #[test]
    fn non_hex_needs_std() {
        assert!(matches!(
            "orange".parse::<Hsv>(),
            Err(ParseColorError::Unrecognized { .. })
        ));
    }

    #[test]
    fn color_spec_falls_back_to_black() {
        assert_eq!(ColorSpec::from("nope").resolve(), Hsv::BLACK);
        assert_eq!(ColorSpec::from("").resolve(), Hsv::BLACK);
        assert!(ColorSpec::from("nope").try_resolve().is_err());
        assert_eq!(
            ColorSpec::from(Rgb::new(255, 0, 0)).resolve(),
            Hsv::new(0.0, 1.0, 1.0)
        );
        let hsv = Hsv::new(33.0, 0.2, 0.4);
        assert_eq!(ColorSpec::from(hsv).resolve(), hsv);
    }
}
