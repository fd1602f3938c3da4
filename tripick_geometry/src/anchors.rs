// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the picker's moving parts, for the rendering layer.
//!
//! An [`Anchor`] is a box given as a top offset, a horizontal inset from one
//! edge of the picker square, a size and a rotation. Which edge the inset is
//! measured from depends on the [`LayoutDirection`]: left-to-right layouts
//! anchor from the left, right-to-left layouts from the right. The angles and
//! the color math are the same in both.
//!
//! The direction is an explicit argument everywhere so a host that flips
//! direction at runtime never renders against a stale value.

use core::f64::consts::FRAC_PI_3;

use kurbo::{Point, Rect, Size};
use tripick_color::Hsv;

use crate::PickerMetrics;
use crate::mapping::{hue_indicator_center, hue_to_radians, sv_indicator_center};

/// Side of the saturation/value indicator, in layout units. Fixed, not scaled.
pub const SV_INDICATOR_SIZE: f64 = 18.0;

/// Height of the color preview strip relative to the picker diameter.
pub const PREVIEW_STRIP_RATIO: f64 = 0.1;

/// Horizontal reading direction of the host layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left-to-right.
    #[default]
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

impl LayoutDirection {
    /// The edge horizontal insets are measured from.
    pub fn anchor_edge(self) -> HorizontalEdge {
        match self {
            Self::LeftToRight => HorizontalEdge::Left,
            Self::RightToLeft => HorizontalEdge::Right,
        }
    }
}

/// Edge of the picker square an [`Anchor`] inset is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    /// Inset from the left edge.
    Left,
    /// Inset from the right edge.
    Right,
}

/// A positioned, sized and rotated box inside the picker square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Distance from the top of the picker square to the top of the box.
    pub top: f64,
    /// Distance from [`Self::edge`] to the near side of the box.
    pub inset: f64,
    /// Edge the inset is measured from.
    pub edge: HorizontalEdge,
    /// Unrotated size of the box.
    pub size: Size,
    /// Rotation about the box center, in radians (clockwise on screen).
    pub rotation: f64,
}

impl Anchor {
    fn centered_on(center: Point, size: Size, rotation: f64, direction: LayoutDirection) -> Self {
        Self {
            top: center.y - size.height / 2.0,
            inset: center.x - size.width / 2.0,
            edge: direction.anchor_edge(),
            size,
            rotation,
        }
    }

    /// Resolve into an unrotated rectangle inside a container of `container_width`.
    ///
    /// A left inset is used as is; a right inset is measured back from
    /// `container_width`.
    pub fn to_rect(&self, container_width: f64) -> Rect {
        let x0 = match self.edge {
            HorizontalEdge::Left => self.inset,
            HorizontalEdge::Right => container_width - self.inset - self.size.width,
        };
        Rect::from_origin_size((x0, self.top), self.size)
    }
}

/// Ring indicator box for `hue`. Rotated so its tick points at the center.
pub fn hue_indicator_anchor(hue: f64, metrics: &PickerMetrics, direction: LayoutDirection) -> Anchor {
    let size = Size::new(metrics.indicator_size, metrics.indicator_size);
    Anchor::centered_on(
        hue_indicator_center(hue, metrics),
        size,
        -hue_to_radians(hue),
        direction,
    )
}

/// Saturation/value indicator box for `color`.
pub fn sv_indicator_anchor(color: Hsv, metrics: &PickerMetrics, direction: LayoutDirection) -> Anchor {
    Anchor::centered_on(
        sv_indicator_center(color.h(), color.s(), color.v(), metrics),
        Size::new(SV_INDICATOR_SIZE, SV_INDICATOR_SIZE),
        0.0,
        direction,
    )
}

/// Rotating container the triangle image is drawn in.
///
/// The container is a `triangle_size` square centered in the picker, so the
/// triangle's centroid is its rotation center. The triangle image itself is
/// [`PickerMetrics::triangle_bounds`], top-aligned and horizontally centered.
pub fn triangle_anchor(hue: f64, metrics: &PickerMetrics, direction: LayoutDirection) -> Anchor {
    let offset = 3.0 * metrics.padding;
    Anchor {
        top: offset,
        inset: offset,
        edge: direction.anchor_edge(),
        size: Size::new(metrics.triangle_size, metrics.triangle_size),
        rotation: FRAC_PI_3 - hue_to_radians(hue),
    }
}

/// Height of the old/current color preview strip under the picker.
pub fn preview_strip_height(metrics: &PickerMetrics) -> f64 {
    PREVIEW_STRIP_RATIO * metrics.picker_diameter
}
