// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::PickerMetrics;

/// Where the picker widget sits on the page.
///
/// The widget box may be wider or taller than the picker: the picker is the
/// largest centered square that fits. Pointer positions arrive page-relative
/// and are brought into picker space by subtracting the page origin and the
/// centering margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutFrame {
    /// Laid-out size of the widget box.
    pub size: Size,
    /// Page position of the widget box's top-left corner.
    pub page_origin: Point,
}

impl LayoutFrame {
    /// Create a frame from a widget size and its page origin.
    pub fn new(size: Size, page_origin: Point) -> Self {
        Self { size, page_origin }
    }

    /// A square frame of side `diameter` at the page origin.
    pub fn square(diameter: f64) -> Self {
        Self::new(Size::new(diameter, diameter), Point::ZERO)
    }

    /// Same position, new size.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    /// Same size, new page origin.
    #[must_use]
    pub fn with_page_origin(self, page_origin: Point) -> Self {
        Self {
            page_origin,
            ..self
        }
    }

    /// Side of the picker square: the smaller widget dimension, never negative.
    pub fn picker_diameter(&self) -> f64 {
        self.size.width.min(self.size.height).max(0.0)
    }

    /// Offset of the picker square inside the widget box.
    pub fn centering_margins(&self) -> Vec2 {
        let d = self.picker_diameter();
        Vec2::new(
            (self.size.width - d).max(0.0) / 2.0,
            (self.size.height - d).max(0.0) / 2.0,
        )
    }

    /// Convert a page-relative pointer position into picker space.
    pub fn to_picker_space(&self, page_point: Point) -> Point {
        page_point - self.page_origin.to_vec2() - self.centering_margins()
    }

    /// Metrics for the picker square in this frame.
    pub fn metrics(&self) -> PickerMetrics {
        PickerMetrics::new(self.picker_diameter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_boxes_center_the_picker_horizontally() {
        let frame = LayoutFrame::new(Size::new(400.0, 300.0), Point::new(20.0, 50.0));
        assert_eq!(frame.picker_diameter(), 300.0);
        assert_eq!(frame.centering_margins(), Vec2::new(50.0, 0.0));
        assert_eq!(
            frame.to_picker_space(Point::new(70.0, 50.0)),
            Point::new(0.0, 0.0)
        );
        assert_eq!(
            frame.to_picker_space(Point::new(220.0, 200.0)),
            Point::new(150.0, 150.0)
        );
    }

    #[test]
    fn tall_boxes_center_the_picker_vertically() {
        let frame = LayoutFrame::new(Size::new(200.0, 260.0), Point::ZERO);
        assert_eq!(frame.centering_margins(), Vec2::new(0.0, 30.0));
        assert_eq!(frame.metrics(), PickerMetrics::new(200.0));
    }

    #[test]
    fn square_frame_is_identity() {
        let frame = LayoutFrame::square(300.0);
        let p = Point::new(12.5, 280.0);
        assert_eq!(frame.to_picker_space(p), p);
    }

    #[test]
    fn empty_frame_is_degenerate() {
        let frame = LayoutFrame::default();
        assert_eq!(frame.picker_diameter(), 0.0);
        assert!(frame.metrics().is_degenerate());
        let frame = LayoutFrame::new(Size::new(-3.0, 10.0), Point::ZERO);
        assert_eq!(frame.picker_diameter(), 0.0);
    }
}
