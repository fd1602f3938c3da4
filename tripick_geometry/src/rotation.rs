// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// Rotate `point` by `angle` radians about `center`.
///
/// Positive angles turn +x toward +y, which is clockwise on screen (y down).
/// Any real angle is accepted.
pub fn rotate_about(point: Point, angle: f64, center: Point) -> Point {
    Affine::rotate_about(angle, center) * point
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        let c = Point::new(10.0, 10.0);
        let p = rotate_about(Point::new(20.0, 10.0), FRAC_PI_2, c);
        assert!(close(p, Point::new(10.0, 20.0)));
    }

    #[test]
    fn center_is_fixed() {
        let c = Point::new(3.0, -4.0);
        assert!(close(rotate_about(c, 1.234, c), c));
    }

    #[test]
    fn full_turns_are_identity() {
        let c = Point::new(1.0, 2.0);
        let p = Point::new(7.0, -3.0);
        assert!(close(rotate_about(p, TAU, c), p));
        assert!(close(rotate_about(p, -3.0 * TAU, c), p));
    }

    #[test]
    fn opposite_angles_cancel() {
        let c = Point::new(50.0, 50.0);
        let p = Point::new(12.0, 80.0);
        let there = rotate_about(p, 0.7, c);
        assert!(close(rotate_about(there, -0.7, c), p));
        assert!(close(rotate_about(p, PI, c), Point::new(88.0, 20.0)));
    }
}
