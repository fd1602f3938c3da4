// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size};
use tripick_color::{ColorSpec, Hsv};
use tripick_geometry::anchors::{
    hue_indicator_anchor, preview_strip_height, sv_indicator_anchor, triangle_anchor,
};
use tripick_geometry::mapping::hue_to_radians;
use tripick_geometry::{Anchor, LayoutDirection, LayoutFrame, PickerMetrics, RotationBucket};
use tripick_gesture::{GestureMode, GestureSession, GestureTracker};

use crate::{PickerConfig, PickerEvent};

/// Everything the rendering layer needs to place the picker's moving parts.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerAnchors {
    /// The ring indicator.
    pub hue_indicator: Anchor,
    /// The saturation/value indicator inside the triangle.
    pub sv_indicator: Anchor,
    /// The rotating triangle container.
    pub triangle: Anchor,
    /// Size of the triangle image inside [`Self::triangle`].
    pub triangle_image: Size,
    /// Rotation bucket key; rebuild the triangle when it changes.
    ///
    /// `None` when bucketing is disabled. Feed it to a
    /// [`RotationGate`](tripick_geometry::RotationGate).
    pub rotation_key: Option<i64>,
    /// Fill of the ring indicator: the pure hue, as `#rrggbb`.
    pub indicator_color: String,
    /// Height of the old/current preview strip.
    pub preview_height: f64,
}

/// One picker instance: the current color, its layout, and the live gesture.
///
/// Every input method returns the notification it produces, if any. Callers
/// forward [`PickerEvent::Changed`] to live preview and
/// [`PickerEvent::Committed`] to whatever persists the choice.
#[derive(Clone, Debug)]
pub struct PickerSession {
    color: Hsv,
    frame: LayoutFrame,
    metrics: PickerMetrics,
    tracker: GestureTracker,
    config: PickerConfig,
}

impl Default for PickerSession {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl PickerSession {
    /// Create a session with no layout yet.
    ///
    /// Until [`resize`](Self::resize) or [`set_layout`](Self::set_layout) is
    /// called the metrics are degenerate and gestures are ignored.
    pub fn new(config: PickerConfig) -> Self {
        Self {
            color: config.initial_color(),
            frame: LayoutFrame::default(),
            metrics: PickerMetrics::default(),
            tracker: GestureTracker::new(),
            config,
        }
    }

    /// The current color.
    pub fn color(&self) -> Hsv {
        self.color
    }

    /// The current color as `#rrggbb`.
    pub fn color_hex(&self) -> String {
        self.color.to_hex()
    }

    /// The reference color, if one was configured.
    pub fn old_color(&self) -> Option<Hsv> {
        self.config.old_color
    }

    /// Metrics for the current layout.
    pub fn metrics(&self) -> &PickerMetrics {
        &self.metrics
    }

    /// The current layout frame.
    pub fn frame(&self) -> &LayoutFrame {
        &self.frame
    }

    /// The session's settings.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replace the color from any supported representation.
    ///
    /// Unparsable text becomes black. No notification is produced.
    pub fn set_color<'a>(&mut self, color: impl Into<ColorSpec<'a>>) {
        self.color = color.into().resolve();
    }

    /// Replace the saturation (companion slider).
    pub fn set_saturation(&mut self, s: f64) -> PickerEvent {
        self.change(self.color.with_saturation(s))
    }

    /// Replace the value (companion slider).
    pub fn set_value(&mut self, v: f64) -> PickerEvent {
        self.change(self.color.with_value(v))
    }

    /// Resize to a square picker of side `diameter`, keeping the page origin.
    pub fn resize(&mut self, diameter: f64) {
        self.set_layout(self.frame.with_size(Size::new(diameter, diameter)));
    }

    /// Replace the layout frame. The color is untouched.
    pub fn set_layout(&mut self, frame: LayoutFrame) {
        self.frame = frame;
        self.metrics = frame.metrics();
        log::debug!(
            "picker laid out at {:.1} ({})",
            self.metrics.picker_diameter,
            if self.metrics.is_degenerate() {
                "degenerate"
            } else {
                "ok"
            }
        );
    }

    /// Replace the layout direction used for anchors.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.config.direction = direction;
    }

    /// Pointer down at a page-relative position.
    ///
    /// Locks the gesture mode and samples the press point. Returns `None` when
    /// the layout is degenerate.
    pub fn on_gesture_start(&mut self, page_point: Point) -> Option<PickerEvent> {
        let point = self.frame.to_picker_space(page_point);
        let next = self.tracker.on_down(point, self.color, &self.metrics)?;
        Some(self.change(next))
    }

    /// Pointer move at a page-relative position.
    pub fn on_gesture_move(&mut self, page_point: Point) -> Option<PickerEvent> {
        let point = self.frame.to_picker_space(page_point);
        let next = self.tracker.on_move(point, self.color, &self.metrics)?;
        Some(self.change(next))
    }

    /// Pointer up: ends the gesture and commits the color.
    ///
    /// Returns `None` if no gesture was live.
    pub fn on_gesture_end(&mut self) -> Option<PickerEvent> {
        let session = self.tracker.on_up()?;
        log::debug!(
            "{:?} gesture committed {}",
            session.mode(),
            self.color.to_hex()
        );
        Some(self.commit())
    }

    /// Pointer cancel: ends the gesture without committing.
    ///
    /// The color keeps whatever the last move set.
    pub fn on_gesture_cancel(&mut self) {
        self.tracker.on_cancel();
    }

    /// Confirm the current color.
    ///
    /// Pointer-up calls this; hosts also call it for a tap on the current
    /// color swatch.
    pub fn commit(&self) -> PickerEvent {
        PickerEvent::Committed(self.color.to_hex())
    }

    /// Mode of the live gesture, if any.
    pub fn gesture_mode(&self) -> Option<GestureMode> {
        self.tracker.session().map(GestureSession::mode)
    }

    /// Tap on the reference swatch: adopt the old color.
    ///
    /// Does nothing when no old color is configured.
    pub fn select_old_color(&mut self) -> Option<PickerEvent> {
        let old = self.config.old_color?;
        self.color = old;
        Some(PickerEvent::OldColorSelected(old.to_hex()))
    }

    /// Anchors for the current color, layout and direction.
    pub fn anchors(&self) -> PickerAnchors {
        let hue = self.color.h();
        let direction = self.config.direction;
        let metrics = &self.metrics;
        PickerAnchors {
            hue_indicator: hue_indicator_anchor(hue, metrics, direction),
            sv_indicator: sv_indicator_anchor(self.color, metrics, direction),
            triangle: triangle_anchor(hue, metrics, direction),
            triangle_image: metrics.triangle_bounds(),
            rotation_key: RotationBucket::new(self.config.rotation_factor)
                .key(hue_to_radians(hue)),
            indicator_color: self.color.pure_hue().to_hex(),
            preview_height: preview_strip_height(metrics),
        }
    }

    fn change(&mut self, next: Hsv) -> PickerEvent {
        self.color = next;
        PickerEvent::Changed(next)
    }
}
