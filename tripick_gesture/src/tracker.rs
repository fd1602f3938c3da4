// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use tripick_color::Hsv;
use tripick_geometry::PickerMetrics;

use crate::{GestureMode, GestureSession};

/// Whether a gesture is in progress, and what it edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down on the picker.
    #[default]
    Idle,
    /// A pointer is down; the mode is locked.
    Active(GestureMode),
}

/// Drives [`GestureSession`]s from raw pointer events.
///
/// At most one session is live. Pointer positions are in picker space.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    session: Option<GestureSession>,
}

impl GestureTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at `point`, replacing any live one.
    ///
    /// Returns the color at the press point, so a tap is enough to pick.
    /// Returns `None` and stays idle when the metrics are degenerate.
    pub fn on_down(&mut self, point: Point, current: Hsv, metrics: &PickerMetrics) -> Option<Hsv> {
        self.session = GestureSession::classify(point, current, metrics);
        let Some(session) = self.session else {
            log::debug!("ignoring pointer down on a degenerate picker");
            return None;
        };
        log::debug!(
            "gesture started at ({:.1}, {:.1}) in {:?} mode",
            point.x,
            point.y,
            session.mode()
        );
        session.sample(point, current, metrics)
    }

    /// Continue the live gesture at `point`.
    ///
    /// Returns `None` when idle or when the locked mode has no sample here.
    pub fn on_move(&mut self, point: Point, current: Hsv, metrics: &PickerMetrics) -> Option<Hsv> {
        let session = self.session?;
        let next = session.sample(point, current, metrics);
        if next.is_none() {
            log::trace!("no sample at ({:.1}, {:.1})", point.x, point.y);
        }
        next
    }

    /// Release the pointer. Returns the session that ended, if one was live.
    pub fn on_up(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Abort the gesture. Returns the session that was dropped, if any.
    pub fn on_cancel(&mut self) -> Option<GestureSession> {
        let session = self.session.take();
        if session.is_some() {
            log::debug!("gesture cancelled");
        }
        session
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        match self.session {
            Some(session) => GesturePhase::Active(session.mode()),
            None => GesturePhase::Idle,
        }
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// True while a pointer is down.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripick_geometry::mapping::{hue_indicator_center, sv_indicator_center};

    fn metrics() -> PickerMetrics {
        PickerMetrics::new(300.0)
    }

    #[test]
    fn saturation_value_drag_stays_locked_over_the_ring() {
        let m = metrics();
        let mut tracker = GestureTracker::new();
        let mut color = Hsv::new(0.0, 1.0, 1.0);

        color = tracker
            .on_down(sv_indicator_center(0.0, 0.5, 0.5, &m), color, &m)
            .expect("press samples");
        assert_eq!(
            tracker.phase(),
            GesturePhase::Active(GestureMode::SaturationValue)
        );
        assert!((color.s() - 0.5).abs() < 1e-9);

        for hue in [90.0, 180.0, 270.0] {
            let next = tracker
                .on_move(hue_indicator_center(hue, &m), color, &m)
                .expect("sample");
            assert_eq!(next.h(), 0.0);
            assert!((0.0..=1.0).contains(&next.s()));
            assert!((0.0..=1.0).contains(&next.v()));
            color = next;
        }
        assert_eq!(
            tracker.phase(),
            GesturePhase::Active(GestureMode::SaturationValue)
        );
    }

    #[test]
    fn hue_drag_stays_locked_over_the_triangle() {
        let m = metrics();
        let mut tracker = GestureTracker::new();
        let color = Hsv::new(0.0, 0.3, 0.6);

        let color = tracker
            .on_down(hue_indicator_center(60.0, &m), color, &m)
            .expect("press samples");
        assert_eq!(tracker.phase(), GesturePhase::Active(GestureMode::Hue));
        assert!((color.h() - 60.0).abs() < 1e-9);

        // The picker center lies inside the triangle; the gesture still edits hue.
        let next = tracker.on_move(m.center(), color, &m).expect("sample");
        assert!((next.h() - 270.0).abs() < 1e-9);
        assert_eq!((next.s(), next.v()), (0.3, 0.6));
    }

    #[test]
    fn up_and_cancel_return_to_idle() {
        let m = metrics();
        let mut tracker = GestureTracker::new();
        tracker.on_down(m.center(), Hsv::RED, &m);
        let ended = tracker.on_up().expect("live session");
        assert_eq!(ended.mode(), GestureMode::SaturationValue);
        assert_eq!(tracker.phase(), GesturePhase::Idle);
        assert!(tracker.on_up().is_none());
        assert!(tracker.on_move(m.center(), Hsv::RED, &m).is_none());

        tracker.on_down(hue_indicator_center(0.0, &m), Hsv::RED, &m);
        assert!(tracker.is_active());
        assert!(tracker.on_cancel().is_some());
        assert!(!tracker.is_active());
        assert!(tracker.on_cancel().is_none());
    }

    #[test]
    fn a_new_press_replaces_the_live_gesture() {
        let m = metrics();
        let mut tracker = GestureTracker::new();
        tracker.on_down(m.center(), Hsv::RED, &m);
        tracker.on_down(hue_indicator_center(200.0, &m), Hsv::RED, &m);
        assert_eq!(tracker.phase(), GesturePhase::Active(GestureMode::Hue));
        assert_eq!(
            tracker.session().map(GestureSession::start),
            Some(hue_indicator_center(200.0, &m))
        );
    }

    #[test]
    fn apex_row_moves_are_ignored() {
        let m = metrics();
        let mut tracker = GestureTracker::new();
        // At hue 330 the triangle is drawn unrotated, so its apex row is y = origin.y.
        let color = Hsv::new(330.0, 0.4, 0.6);
        let color = tracker.on_down(m.center(), color, &m).expect("press samples");
        assert_eq!(
            tracker.phase(),
            GesturePhase::Active(GestureMode::SaturationValue)
        );

        let origin = m.triangle_origin();
        let apex_row = Point::new(origin.x + 3.0, origin.y);
        assert!(tracker.on_move(apex_row, color, &m).is_none());
        // The gesture survives and later samples still land.
        assert!(tracker.is_active());
        assert!(tracker.on_move(m.center(), color, &m).is_some());
    }

    #[test]
    fn degenerate_press_is_ignored() {
        let m = PickerMetrics::new(0.0);
        let mut tracker = GestureTracker::new();
        assert!(tracker.on_down(Point::ZERO, Hsv::RED, &m).is_none());
        assert_eq!(tracker.phase(), GesturePhase::Idle);
        assert!(tracker.on_move(Point::new(1.0, 1.0), Hsv::RED, &m).is_none());
    }
}
