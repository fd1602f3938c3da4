// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a synthetic drag against a picker session and print what a host
//! would receive.
//!
//! The drag presses inside the triangle, wanders out over the ring (still
//! editing saturation/value), and releases. A second gesture sweeps the hue
//! ring and is cancelled. Anchors are printed for the final color, with a
//! [`RotationGate`] deciding when the triangle would be rebuilt.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tripick_demos --example drag_session`

use kurbo::{Point, Size};
use tripick::{
    Hsv, LayoutDirection, LayoutFrame, PickerConfig, PickerEvent, PickerSession, RotationGate,
};

fn report(label: &str, event: Option<PickerEvent>) {
    match event {
        Some(PickerEvent::Changed(color)) => println!(
            "{label:>8}: changed h={:6.2} s={:.3} v={:.3} {}",
            color.h(),
            color.s(),
            color.v(),
            color.to_hex()
        ),
        Some(PickerEvent::Committed(hex)) => println!("{label:>8}: committed {hex}"),
        Some(PickerEvent::OldColorSelected(hex)) => println!("{label:>8}: old color {hex}"),
        None => println!("{label:>8}: (ignored)"),
    }
}

fn main() {
    env_logger::init();

    let config = PickerConfig::default()
        .with_old_color(Hsv::new(210.0, 0.6, 0.9))
        .with_default_color(Hsv::RED);
    let mut picker = PickerSession::new(config);

    // A 420x320 widget box placed at (40, 60) on the page; the picker is the
    // centered 320 square.
    picker.set_layout(LayoutFrame::new(
        Size::new(420.0, 320.0),
        Point::new(40.0, 60.0),
    ));
    let metrics = *picker.metrics();
    let page_center = Point::new(40.0 + 50.0 + 160.0, 60.0 + 160.0);
    log::info!(
        "picker diameter {:.1}, triangle {:.1}x{:.1}",
        metrics.picker_diameter,
        metrics.triangle_width,
        metrics.triangle_height
    );

    // Saturation/value drag from the center out past the ring.
    report("down", picker.on_gesture_start(page_center));
    for step in 1..=6 {
        let t = f64::from(step) / 6.0;
        let p = page_center + (t * metrics.indicator_ring_radius) * kurbo::Vec2::new(0.6, -0.8);
        report("move", picker.on_gesture_move(p));
    }
    report("up", picker.on_gesture_end());

    // Hue sweep a quarter turn around the ring, then cancel.
    let r = metrics.indicator_ring_radius;
    let mut gate = RotationGate::new();
    report("down", picker.on_gesture_start(page_center + kurbo::Vec2::new(r, 0.0)));
    for step in 1..=9 {
        let angle = f64::from(step) * 10.0_f64.to_radians();
        let p = page_center + kurbo::Vec2::new(r * angle.cos(), -r * angle.sin());
        report("move", picker.on_gesture_move(p));
        let anchors = picker.anchors();
        if gate.should_rebuild(anchors.rotation_key) {
            println!(
                "          rebuild triangle (key {:?}, rotation {:.4})",
                anchors.rotation_key, anchors.triangle.rotation
            );
        }
    }
    picker.on_gesture_cancel();
    println!("  cancel: color stays {}", picker.color_hex());

    report("old", picker.select_old_color());
    report("commit", Some(picker.commit()));

    for direction in [LayoutDirection::LeftToRight, LayoutDirection::RightToLeft] {
        picker.set_layout_direction(direction);
        let anchors = picker.anchors();
        let rect = anchors.sv_indicator.to_rect(metrics.picker_diameter);
        println!(
            "{direction:?}: sv indicator at ({:.1}, {:.1}), ring indicator {}",
            rect.x0, rect.y0, anchors.indicator_color
        );
    }
}
