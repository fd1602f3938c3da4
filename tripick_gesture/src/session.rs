// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use tripick_color::Hsv;
use tripick_geometry::PickerMetrics;
use tripick_geometry::mapping::{hue_from_point, raw_sv_from_point, sv_from_point};

/// What a gesture edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureMode {
    /// Dragging around the ring: hue changes, saturation and value are kept.
    Hue,
    /// Dragging in the triangle: saturation and value change, hue is kept.
    SaturationValue,
}

/// One pointer-down-to-up interaction, with its mode locked at the start.
///
/// The mode cannot change after [`GestureSession::classify`]; a new gesture
/// needs a new session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    mode: GestureMode,
    start: Point,
}

impl GestureSession {
    /// Classify a pointer-down at `start` (picker space) against the triangle
    /// drawn for `current`.
    ///
    /// Returns `None` when the metrics are degenerate; such a press is ignored.
    /// A start point with no usable triangle sample (the apex row) edits hue.
    pub fn classify(start: Point, current: Hsv, metrics: &PickerMetrics) -> Option<Self> {
        if metrics.is_degenerate() {
            return None;
        }
        let mode = match raw_sv_from_point(start, current.h(), metrics) {
            Some(sample) if sample.is_inside() => GestureMode::SaturationValue,
            _ => GestureMode::Hue,
        };
        Some(Self { mode, start })
    }

    /// The locked mode.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Where the gesture started, in picker space.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The color produced by the pointer at `point`, given the color before it.
    ///
    /// Hue mode replaces the hue; saturation/value mode replaces saturation and
    /// value (clamped into `[0, 1]`). Returns `None` when saturation/value has
    /// no usable sample at `point`.
    pub fn sample(&self, point: Point, current: Hsv, metrics: &PickerMetrics) -> Option<Hsv> {
        match self.mode {
            GestureMode::Hue => Some(current.with_hue(hue_from_point(point, metrics))),
            GestureMode::SaturationValue => {
                let sample = sv_from_point(point, current.h(), metrics)?;
                Some(Hsv::new(current.h(), sample.saturation, sample.value))
            }
        }
    }
}
