// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer ↔ color mapping.
//!
//! ## Hue
//!
//! Hue is the angle of the pointer around the picker center, measured with
//! `atan2(dx, dy)` and shifted by `3π/2` so that straight up is 90°, left is
//! 180°, down is 270° and right is 0°. Every point has a hue, including points
//! far outside the ring and the center itself, so hue selection has no dead
//! zone. [`hue_indicator_center`] is the exact inverse on the indicator ring.
//!
//! ## Saturation and value
//!
//! The triangle is drawn rotated by `330° - h`, keeping its pure-hue corner
//! pointed at the ring indicator. [`raw_sv_from_point`] undoes that rotation
//! about the centroid and reads the point in the canonical frame, where the
//! apex (black, `v = 0`) is at the top and the base (`v = 1`) runs from white
//! (`s = 0`, left) to the pure hue (`s = 1`, right). Each row narrows linearly
//! toward the apex, so `s` is measured across the row's own width.
//!
//! Raw samples leave `[0, 1]` whenever the pointer is outside the triangle.
//! [`normalize_triangle_touch`] decides which of those near misses snap onto
//! the boundary; clamping into `[0, 1]` is left to the caller.

use core::f64::consts::{FRAC_PI_2, PI};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use tripick_color::normalize_hue;

use crate::{PickerMetrics, rotate_about};

/// Angle between the hue ring's zero and the triangle artwork's zero, in degrees.
pub const TRIANGLE_HUE_OFFSET_DEGREES: f64 = 330.0;

/// Width of the zone next to each triangle corner, in saturation/value units.
pub const CORNER_ZONE: f64 = 0.12;

/// How far past an edge a touch still snaps onto it, away from the corners.
pub const NORMAL_MARGIN: f64 = 0.10;

/// How far past an edge a touch still snaps onto it, near the left and top corners.
pub const CORNER_MARGIN: f64 = 0.05;

const HUE_ZERO_OFFSET: f64 = PI + FRAC_PI_2;

/// Hue (degrees, `[0, 360)`) for a point in picker space.
pub fn hue_from_point(point: Point, metrics: &PickerMetrics) -> f64 {
    let delta = point - metrics.center();
    let angle = delta.x.atan2(delta.y) + HUE_ZERO_OFFSET;
    normalize_hue(angle.to_degrees())
}

/// Ring angle (radians) for a hue; the inverse of the shift in [`hue_from_point`].
pub fn hue_to_radians(hue: f64) -> f64 {
    hue.to_radians() - HUE_ZERO_OFFSET
}

/// Rotation (radians) that takes the drawn triangle back to its canonical frame.
///
/// The triangle is drawn rotated by the negation of this angle.
pub fn triangle_rotation(hue: f64) -> f64 {
    normalize_hue(hue - TRIANGLE_HUE_OFFSET_DEGREES).to_radians()
}

/// A saturation/value reading taken inside (or near) the triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleSample {
    /// Saturation; outside `[0, 1]` when the point is past the left/right edges.
    pub saturation: f64,
    /// Value; outside `[0, 1]` when the point is above the apex or below the base.
    pub value: f64,
    /// Width of the sampled row divided by the triangle height.
    ///
    /// Scales saturation excursions into distances comparable across rows;
    /// [`normalize_triangle_touch`] uses it to judge how far past an edge a
    /// touch landed.
    pub s_ratio: f64,
}

impl TriangleSample {
    /// True when both saturation and value lie in `[0, 1]`.
    pub fn is_inside(&self) -> bool {
        (0.0..=1.0).contains(&self.saturation) && (0.0..=1.0).contains(&self.value)
    }

    /// Apply [`normalize_triangle_touch`] to this sample.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (saturation, value) = normalize_triangle_touch(self.saturation, self.value, self.s_ratio);
        Self {
            saturation,
            value,
            ..self
        }
    }
}

/// Read saturation and value at `point` for a triangle drawn at `hue`, without
/// any edge handling.
///
/// Returns `None` when there is no usable sample: the metrics are degenerate, or
/// the point lies on the apex row where the row width (the saturation divisor)
/// is zero. Callers ignore such events.
pub fn raw_sv_from_point(point: Point, hue: f64, metrics: &PickerMetrics) -> Option<TriangleSample> {
    if metrics.is_degenerate() {
        return None;
    }
    let width = metrics.triangle_width;
    let height = metrics.triangle_height;

    let local = point - metrics.triangle_origin().to_vec2();
    let canonical = rotate_about(local, triangle_rotation(hue), metrics.triangle_centroid());

    let line = width * canonical.y / height;
    if line == 0.0 || !line.is_finite() {
        return None;
    }
    let margin = width / 2.0 - (width / 2.0) * canonical.y / height;
    Some(TriangleSample {
        saturation: (canonical.x - margin) / line,
        value: canonical.y / height,
        s_ratio: line / height,
    })
}

/// Read saturation and value at `point`, snapping near misses onto the
/// triangle's edges.
///
/// This is [`raw_sv_from_point`] followed by [`normalize_triangle_touch`]. The
/// result can still be outside `[0, 1]`; clamp before storing.
pub fn sv_from_point(point: Point, hue: f64, metrics: &PickerMetrics) -> Option<TriangleSample> {
    raw_sv_from_point(point, hue, metrics).map(TriangleSample::normalized)
}

/// Decide whether an out-of-range raw sample snaps onto the triangle boundary.
///
/// A single pixel of touch error swings saturation a long way near the sharp
/// corners, so the snap margin is tighter there:
///
/// - Near the pure-hue corner (`s` and `v` both within [`CORNER_ZONE`] of 1)
///   the sample passes through unchanged.
/// - Near the white (left) and black (top) corners, values up to
///   [`CORNER_MARGIN`] past an edge snap to it.
/// - Elsewhere, values up to [`NORMAL_MARGIN`] past an edge snap to it.
///
/// Saturation excursions are judged on a directional proxy that scales the
/// excursion by `s_ratio` and mirrors it across the triangle depending on
/// which side was crossed. Values that do not snap are returned as is: this
/// function never clamps.
pub fn normalize_triangle_touch(s: f64, v: f64, s_ratio: f64) -> (f64, f64) {
    let ns = if s > 1.0 {
        if v > 0.0 {
            1.0 - (1.0 - s) * s_ratio
        } else {
            1.0 - s * s_ratio
        }
    } else if v > 0.0 {
        s * s_ratio
    } else {
        (1.0 - s) * s_ratio
    };

    let right_corner = s > 1.0 - CORNER_ZONE && v > 1.0 - CORNER_ZONE;
    if right_corner {
        return (s, v);
    }
    let left_corner = ns < CORNER_ZONE && v > 1.0 - CORNER_ZONE;
    let top_corner = ns < CORNER_ZONE && v < CORNER_ZONE;
    let margin = if left_corner || top_corner {
        CORNER_MARGIN
    } else {
        NORMAL_MARGIN
    };

    let s = if s < 0.0 && ns > -margin {
        0.0
    } else if s > 1.0 && ns < 1.0 + margin {
        1.0
    } else {
        s
    };
    let v = if v < 0.0 && v > -margin {
        0.0
    } else if v > 1.0 && v < 1.0 + margin {
        1.0
    } else {
        v
    };
    (s, v)
}

/// Center of the ring indicator for `hue`, in picker space.
pub fn hue_indicator_center(hue: f64, metrics: &PickerMetrics) -> Point {
    let (sin, cos) = hue_to_radians(hue).sin_cos();
    let c = metrics.center();
    let r = metrics.indicator_ring_radius;
    // x follows the sine and y the cosine, matching `atan2(dx, dy)` above.
    Point::new(c.x + sin * r, c.y + cos * r)
}

/// Center of the saturation/value indicator, in picker space, for a triangle
/// drawn at `hue`.
///
/// Inverse of [`raw_sv_from_point`] for `s, v` in `[0, 1]` (except at the apex,
/// where every saturation shares one point).
pub fn sv_indicator_center(hue: f64, s: f64, v: f64, metrics: &PickerMetrics) -> Point {
    let width = metrics.triangle_width;
    let margin = width / 2.0 - v * (width / 2.0);
    let canonical = Point::new(s * (width - 2.0 * margin) + margin, v * metrics.triangle_height);
    let unrotated = canonical + metrics.triangle_origin().to_vec2();
    rotate_about(unrotated, -triangle_rotation(hue), metrics.center())
}
