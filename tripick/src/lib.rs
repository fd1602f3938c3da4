// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tripick: a headless hue-ring + triangle HSV color picker.
//!
//! ## Overview
//!
//! The picker is a hue ring with an equilateral triangle inscribed in it.
//! Dragging on the ring picks the hue; dragging inside the triangle picks
//! saturation and value. The triangle is drawn rotated with the hue so its
//! pure-hue corner always faces the ring indicator.
//!
//! This crate owns the state and the math. It draws nothing: the host
//! delivers layout and pointer events to a [`PickerSession`] and applies the
//! [`PickerAnchors`] it hands back to its own views.
//!
//! ## Layering
//!
//! - [`tripick_color`]: [`Hsv`] / [`Rgb`] values and color text parsing.
//! - [`tripick_geometry`]: metrics, pointer ↔ color mapping, and anchors.
//! - [`tripick_gesture`]: locking a drag to hue or saturation/value.
//! - this crate: the session tying them together, plus [`PickerConfig`] and
//!   [`PickerEvent`].
//!
//! ## Events
//!
//! Each input call returns the [`PickerEvent`] it produces, if any:
//! [`PickerEvent::Changed`] for every drag sample and
//! [`PickerEvent::Committed`] on release. A cancelled gesture produces no
//! commit. Degenerate layouts (zero size) silently ignore pointer input.
//!
//! ```rust
//! use kurbo::Point;
//! use tripick::{PickerConfig, PickerEvent, PickerSession};
//!
//! let mut picker = PickerSession::new(PickerConfig::default());
//! picker.resize(300.0);
//!
//! // Press on the ring straight above the center: hue 90.
//! let r = picker.metrics().indicator_ring_radius;
//! match picker.on_gesture_start(Point::new(150.0, 150.0 - r)) {
//!     Some(PickerEvent::Changed(color)) => assert!((color.h() - 90.0).abs() < 1e-9),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! // Release commits the color as hex.
//! assert_eq!(
//!     picker.on_gesture_end(),
//!     Some(PickerEvent::Committed(picker.color_hex()))
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`, including
//!   CSS color text parsing in `tripick_color`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math;
//!   typically used when integrating into embedded or `no_std` environments.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod session;

pub use config::PickerConfig;
pub use event::PickerEvent;
pub use session::{PickerAnchors, PickerSession};

pub use tripick_color::{ColorSpec, Hsv, ParseColorError, Rgb};
pub use tripick_geometry::{
    Anchor, HorizontalEdge, LayoutDirection, LayoutFrame, PickerMetrics, RotationBucket,
    RotationGate,
};
pub use tripick_gesture::GestureMode;
