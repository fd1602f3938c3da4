// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tripick Geometry: pointer ↔ color mapping for a hue-ring + triangle picker.
//!
//! The picker is a square of side `d` (the *picker diameter*) holding a hue
//! ring and an equilateral triangle inscribed in it. The triangle is drawn
//! rotated with the hue so that its pure-hue corner always faces the ring
//! indicator; saturation and value are read inside it.
//!
//! All functions here are pure and work in *picker space*: `(0, 0)` is the
//! top-left of the picker square, y grows downward. [`LayoutFrame`] converts
//! page-relative pointer positions into picker space.
//!
//! - [`PickerMetrics`] derives every size from `d`.
//! - [`rotate_about`] is the one rotation primitive everything shares.
//! - [`mapping`] holds the forward (point → hue, point → saturation/value) and
//!   inverse (color → indicator center) functions, plus the corner/edge touch
//!   normalization for the triangle.
//! - [`anchors`] turns colors into rectangles the rendering layer can place,
//!   honoring the layout direction, and [`RotationBucket`]/[`RotationGate`]
//!   throttle how often the rotated triangle is rebuilt.
//!
//! ```rust
//! use kurbo::Point;
//! use tripick_geometry::{PickerMetrics, mapping};
//!
//! let metrics = PickerMetrics::new(300.0);
//!
//! // Straight above the center is hue 90.
//! let top = Point::new(150.0, 150.0 - metrics.indicator_ring_radius);
//! assert!((mapping::hue_from_point(top, &metrics) - 90.0).abs() < 1e-9);
//!
//! // Every color has a spot inside the triangle that maps back to it.
//! let at = mapping::sv_indicator_center(200.0, 0.25, 0.75, &metrics);
//! let sample = mapping::sv_from_point(at, 200.0, &metrics).unwrap();
//! assert!((sample.saturation - 0.25).abs() < 1e-9);
//! assert!((sample.value - 0.75).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math;
//!   typically used when integrating into embedded or `no_std` environments.
//!
//! This crate is `no_std`.

#![no_std]

pub mod anchors;
mod bucket;
mod frame;
pub mod mapping;
mod metrics;
mod rotation;

pub use anchors::{Anchor, HorizontalEdge, LayoutDirection};
pub use bucket::{DEFAULT_ROTATION_FACTOR, RotationBucket, RotationGate};
pub use frame::LayoutFrame;
pub use mapping::TriangleSample;
pub use metrics::{INDICATOR_TO_PICKER_RATIO, PickerMetrics};
pub use rotation::rotate_about;
