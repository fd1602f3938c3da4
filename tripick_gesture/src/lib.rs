// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tripick Gesture: which part of the picker a drag is editing.
//!
//! A drag on the picker edits either the hue (ring) or the saturation/value
//! (triangle). The choice is made once, on pointer down, and held until the
//! pointer is released or the gesture is cancelled:
//!
//! ```text
//! Idle ──down──▶ classify ──▶ Hue ──────────────┐
//!                        └──▶ SaturationValue ──┴──up/cancel──▶ Idle
//! ```
//!
//! Classification reads the raw (un-normalized) triangle sample at the down
//! point: if saturation or value falls outside `[0, 1]` the drag edits hue,
//! otherwise saturation/value. Every later move is routed through the locked
//! mode, so a drag that wanders across the ring/triangle boundary never
//! flickers between modes.
//!
//! ## Usage
//!
//! ```rust
//! use tripick_color::Hsv;
//! use tripick_geometry::{PickerMetrics, mapping};
//! use tripick_gesture::{GestureMode, GesturePhase, GestureTracker};
//!
//! let metrics = PickerMetrics::new(300.0);
//! let mut tracker = GestureTracker::new();
//! let color = Hsv::RED;
//!
//! // Press in the middle of the triangle…
//! let color = tracker.on_down(metrics.center(), color, &metrics).unwrap();
//! assert_eq!(tracker.phase(), GesturePhase::Active(GestureMode::SaturationValue));
//!
//! // …and drag out over the ring: still editing saturation/value.
//! let ring = mapping::hue_indicator_center(120.0, &metrics);
//! let dragged = tracker.on_move(ring, color, &metrics).unwrap();
//! assert_eq!(dragged.h(), color.h());
//!
//! assert!(tracker.on_up().is_some());
//! assert_eq!(tracker.phase(), GesturePhase::Idle);
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

mod session;
mod tracker;

pub use session::{GestureMode, GestureSession};
pub use tracker::{GesturePhase, GestureTracker};
