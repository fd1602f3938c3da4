// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized hue/saturation/value color.

use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::Rgb;

/// Reduce a hue in degrees into `[0, 360)`.
///
/// Non-finite input maps to `0`.
pub fn normalize_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let h = degrees.rem_euclid(360.0);
    // `rem_euclid` can round up to the modulus for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

fn unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// A color in hue/saturation/value form.
///
/// Hue is measured in degrees and always lies in `[0, 360)`; saturation and
/// value lie in `[0, 1]`. Fields are private so the invariant holds for every
/// stored value; out-of-range inputs are wrapped (hue) or clamped (saturation,
/// value) on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    /// Black. Also the fallback for color text that fails to parse.
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
    };

    /// Fully saturated red, the picker's initial color.
    pub const RED: Self = Self {
        h: 0.0,
        s: 1.0,
        v: 1.0,
    };

    /// Create a color, wrapping hue into `[0, 360)` and clamping `s`, `v` into `[0, 1]`.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: unit(s),
            v: unit(v),
        }
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Saturation, `[0, 1]`.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Value (brightness), `[0, 1]`.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Same saturation and value, new hue.
    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.v)
    }

    /// Same hue and value, new saturation.
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.v)
    }

    /// Same hue and saturation, new value.
    #[must_use]
    pub fn with_value(self, v: f64) -> Self {
        Self::new(self.h, self.s, v)
    }

    /// The fully saturated, full-value color at this hue.
    ///
    /// This is the color of the triangle's pure-hue corner and of the ring
    /// indicator.
    #[must_use]
    pub fn pure_hue(self) -> Self {
        Self::new(self.h, 1.0, 1.0)
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb {
        let (h, s, v) = (self.h, self.s, self.v);
        if s == 0.0 {
            return Rgb::from_unit(v, v, v);
        }
        let h6 = h / 60.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Hue is below 360, so the sector is an integer in 0..6."
        )]
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb::from_unit(r, g, b)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Convert HSL components (hue in degrees, `s`/`l` in `[0, 1]`) to HSV.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (s, l) = (unit(s), unit(l));
        let v = l + s * l.min(1.0 - l);
        let s_hsv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
        Self::new(h, s_hsv, v)
    }
}

impl Default for Hsv {
    /// [`Hsv::BLACK`], matching the parse fallback.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_wraps_hue_and_clamps_channels() {
        let c = Hsv::new(-30.0, 1.4, -0.2);
        assert!(approx(c.h(), 330.0));
        assert_eq!(c.s(), 1.0);
        assert_eq!(c.v(), 0.0);

        let c = Hsv::new(720.0, 0.5, 0.5);
        assert_eq!(c.h(), 0.0);
    }

    #[test]
    fn normalize_hue_never_returns_360() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert!(normalize_hue(-1e-20) < 360.0);
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert_eq!(normalize_hue(f64::INFINITY), 0.0);
    }

    #[test]
    fn nan_channels_become_zero() {
        let c = Hsv::new(10.0, f64::NAN, f64::NAN);
        assert_eq!(c.s(), 0.0);
        assert_eq!(c.v(), 0.0);
    }

    #[test]
    fn primary_and_secondary_hues_to_rgb() {
        assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsv::new(60.0, 1.0, 1.0).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Hsv::new(120.0, 1.0, 1.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsv::new(180.0, 1.0, 1.0).to_rgb(), Rgb::new(0, 255, 255));
        assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsv::new(300.0, 1.0, 1.0).to_rgb(), Rgb::new(255, 0, 255));
    }

    #[test]
    fn greys_ignore_hue() {
        assert_eq!(Hsv::new(200.0, 0.0, 0.5).to_rgb(), Rgb::new(128, 128, 128));
        assert_eq!(Hsv::new(200.0, 0.7, 0.0).to_rgb(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn hex_is_lowercase_with_hash() {
        assert_eq!(Hsv::RED.to_hex(), "#ff0000");
        assert_eq!(Hsv::new(217.0, 0.76, 0.96).to_hex(), "#3b82f5");
    }

    #[test]
    fn hsl_conversion() {
        // hsl(0, 100%, 50%) is pure red.
        let c = Hsv::from_hsl(0.0, 1.0, 0.5);
        assert!(approx(c.s(), 1.0));
        assert!(approx(c.v(), 1.0));
        // Lightness 1 is white regardless of saturation.
        let c = Hsv::from_hsl(90.0, 0.4, 1.0);
        assert!(approx(c.s(), 0.0));
        assert!(approx(c.v(), 1.0));
        // Lightness 0 is black.
        assert_eq!(Hsv::from_hsl(90.0, 0.4, 0.0).v(), 0.0);
    }

    #[test]
    fn channel_builders_keep_other_channels() {
        let c = Hsv::new(120.0, 0.3, 0.6);
        let d = c.with_saturation(0.9);
        assert_eq!((d.h(), d.s(), d.v()), (120.0, 0.9, 0.6));
        let d = c.with_value(2.0);
        assert_eq!(d.v(), 1.0);
        let d = c.with_hue(480.0);
        assert!(approx(d.h(), 120.0));
        assert_eq!(c.pure_hue(), Hsv::new(120.0, 1.0, 1.0));
    }
}
