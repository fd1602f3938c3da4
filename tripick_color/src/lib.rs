// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tripick Color: the color values a hue-ring picker stores and exchanges.
//!
//! - [`Hsv`] is the picker's internal representation. Hue is kept in `[0, 360)`
//!   and saturation/value in `[0, 1]`; every constructor enforces this.
//! - [`Rgb`] is an 8-bit-per-channel color used for hex output and for
//!   callers that already hold RGB data.
//! - [`ColorSpec`] is what a host passes when it overrides the picker color: an
//!   [`Hsv`], an [`Rgb`], or free text such as `"#3b82f6"`, `"rgb(59, 130, 246)"`,
//!   `"hsv(217, 76%, 96%)"` or `"teal"`.
//!
//! Text that fails to parse is never fatal for a picker. [`ColorSpec::resolve`]
//! substitutes [`Hsv::BLACK`] and logs a warning; callers that want strict
//! validation use [`ColorSpec::try_resolve`] or [`str::parse`] directly.
//!
//! ```rust
//! use tripick_color::{ColorSpec, Hsv, Rgb};
//!
//! let teal: Hsv = "teal".parse().unwrap();
//! assert_eq!(teal.to_rgb(), Rgb::new(0, 128, 128));
//! assert_eq!(teal.to_hex(), "#008080");
//!
//! // Malformed text falls back to black instead of failing.
//! assert_eq!(ColorSpec::from("not a color").resolve(), Hsv::BLACK);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`,
//!   and CSS color text (names and functional forms) via `csscolorparser`.
//!   Without it only hex text is parsed.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math;
//!   typically used when integrating into embedded or `no_std` environments.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hsv;
mod parse;
mod rgb;

pub use hsv::{Hsv, normalize_hue};
pub use parse::{ColorSpec, ParseColorError};
pub use rgb::Rgb;
