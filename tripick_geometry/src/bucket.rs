// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation buckets: throttling rebuilds of the rotated triangle.
//!
//! Re-rotating the masked triangle image at every fractional hue change leaves
//! a hairline mismatch between the image mask and the computed overlay. The
//! rendering layer instead keys the triangle (and its indicator) on a
//! quantized angle and only rebuilds them when that key changes. None of this
//! affects any color value.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Default bucket factor: keys change every 1/100 rad (about 0.57°).
pub const DEFAULT_ROTATION_FACTOR: f64 = 100.0;

/// Quantizes a rotation angle into discrete rebuild keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationBucket {
    /// Buckets per radian. Values below `1` disable bucketing.
    pub factor: f64,
}

impl Default for RotationBucket {
    fn default() -> Self {
        Self {
            factor: DEFAULT_ROTATION_FACTOR,
        }
    }
}

impl RotationBucket {
    /// Bucketing switched off: every angle change rebuilds.
    pub const DISABLED: Self = Self { factor: 0.0 };

    /// Create a bucket policy with `factor` buckets per radian.
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// True unless the factor is below `1` (or NaN).
    pub fn is_enabled(&self) -> bool {
        self.factor >= 1.0
    }

    /// Bucket key for `angle` (radians), or `None` when bucketing is disabled.
    pub fn key(&self, angle: f64) -> Option<i64> {
        if !self.is_enabled() {
            return None;
        }
        let key = (angle * self.factor).floor();
        if !key.is_finite() {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Keys only need to differ between neighboring buckets; the cast saturates."
        )]
        Some(key as i64)
    }
}

/// Remembers the last bucket key and reports when a rebuild is due.
///
/// Owned by whatever draws the triangle; one gate per drawn picker.
#[derive(Clone, Debug, Default)]
pub struct RotationGate {
    last: Option<i64>,
}

impl RotationGate {
    /// Create a gate that will rebuild on the first key it sees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` and return whether the triangle must be rebuilt.
    ///
    /// A `None` key (bucketing disabled) always rebuilds.
    pub fn should_rebuild(&mut self, key: Option<i64>) -> bool {
        match key {
            None => {
                self.last = None;
                true
            }
            Some(key) => self.last.replace(key) != Some(key),
        }
    }

    /// Forget the last key so the next call rebuilds.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
