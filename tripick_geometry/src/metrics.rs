// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

/// Ring indicator size relative to the picker diameter.
///
/// Measured from the ring artwork (a 42px indicator on a 510px ring). This and
/// the other ratios in [`PickerMetrics::new`] must match the rendered ring and
/// triangle masks; changing them means regenerating those assets.
pub const INDICATOR_TO_PICKER_RATIO: f64 = 42.0 / 510.0;

/// Shape metrics derived from the picker diameter.
///
/// Immutable for a given diameter: on resize, build a new value instead of
/// mutating this one. A zero diameter yields all-zero metrics; see
/// [`PickerMetrics::is_degenerate`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PickerMetrics {
    /// Side of the square holding the ring.
    pub picker_diameter: f64,
    /// Side of the ring indicator glyph.
    pub indicator_size: f64,
    /// Layout unit: one third of the indicator size.
    pub padding: f64,
    /// Side of the square container the triangle is drawn (and rotated) in.
    pub triangle_size: f64,
    /// Circumradius of the triangle.
    pub triangle_radius: f64,
    /// Apex-to-base height of the triangle.
    pub triangle_height: f64,
    /// Base width of the triangle.
    pub triangle_width: f64,
    /// Distance from the picker center to the ring indicator center.
    pub indicator_ring_radius: f64,
}

impl PickerMetrics {
    /// Derive metrics for a picker of the given diameter.
    ///
    /// Negative or NaN diameters are treated as zero.
    pub fn new(picker_diameter: f64) -> Self {
        let picker_diameter = picker_diameter.max(0.0);
        let indicator_size = INDICATOR_TO_PICKER_RATIO * picker_diameter;
        let padding = indicator_size / 3.0;
        let triangle_size = picker_diameter - 6.0 * padding;
        let triangle_radius = triangle_size / 2.0;
        let triangle_height = 1.5 * triangle_radius;
        let triangle_width = 2.0 * triangle_radius * 0.75_f64.sqrt();
        let indicator_ring_radius = picker_diameter / 2.0 - indicator_size / 2.0 - padding;
        Self {
            picker_diameter,
            indicator_size,
            padding,
            triangle_size,
            triangle_radius,
            triangle_height,
            triangle_width,
            indicator_ring_radius,
        }
    }

    /// True when the triangle has no area and saturation/value cannot be sampled.
    pub fn is_degenerate(&self) -> bool {
        !(self.triangle_width > 0.0 && self.triangle_height > 0.0)
    }

    /// Center of the ring, which is also the triangle's centroid.
    pub fn center(&self) -> Point {
        let r = self.picker_diameter / 2.0;
        Point::new(r, r)
    }

    /// Top-left of the unrotated triangle's bounding box, in picker space.
    pub fn triangle_origin(&self) -> Point {
        let c = self.center();
        Point::new(
            c.x - self.triangle_width / 2.0,
            c.y - 2.0 * self.triangle_height / 3.0,
        )
    }

    /// Centroid of the unrotated triangle relative to [`Self::triangle_origin`].
    pub fn triangle_centroid(&self) -> Point {
        Point::new(self.triangle_width / 2.0, 2.0 * self.triangle_height / 3.0)
    }

    /// Size of the unrotated triangle's bounding box.
    pub fn triangle_bounds(&self) -> Size {
        Size::new(self.triangle_width, self.triangle_height)
    }
}
