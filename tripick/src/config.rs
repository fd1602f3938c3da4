// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tripick_color::Hsv;
use tripick_geometry::{DEFAULT_ROTATION_FACTOR, LayoutDirection};

/// Host-supplied settings for a [`PickerSession`](crate::PickerSession).
///
/// Shape ratios are fixed by the ring and triangle artwork and are not
/// configurable here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerConfig {
    /// Rotation buckets per radian; below `1` disables bucketing.
    pub rotation_factor: f64,
    /// Layout direction used for anchors.
    pub direction: LayoutDirection,
    /// Starting color. Takes precedence over [`Self::old_color`].
    pub default_color: Option<Hsv>,
    /// Reference color shown in the "old" swatch.
    pub old_color: Option<Hsv>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            rotation_factor: DEFAULT_ROTATION_FACTOR,
            direction: LayoutDirection::LeftToRight,
            default_color: None,
            old_color: None,
        }
    }
}

impl PickerConfig {
    /// Set the rotation bucket factor.
    #[must_use]
    pub fn with_rotation_factor(self, rotation_factor: f64) -> Self {
        Self {
            rotation_factor,
            ..self
        }
    }

    /// Set the layout direction.
    #[must_use]
    pub fn with_direction(self, direction: LayoutDirection) -> Self {
        Self { direction, ..self }
    }

    /// Set the starting color.
    #[must_use]
    pub fn with_default_color(self, color: Hsv) -> Self {
        Self {
            default_color: Some(color),
            ..self
        }
    }

    /// Set the reference color.
    #[must_use]
    pub fn with_old_color(self, color: Hsv) -> Self {
        Self {
            old_color: Some(color),
            ..self
        }
    }

    /// Color a new session starts with: the default color, else the old
    /// color, else pure red.
    pub fn initial_color(&self) -> Hsv {
        self.default_color.or(self.old_color).unwrap_or(Hsv::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.rotation_factor, 100.0);
        assert_eq!(config.direction, LayoutDirection::LeftToRight);
        assert_eq!(config.initial_color(), Hsv::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn default_color_overrides_old_color() {
        let old = Hsv::new(120.0, 0.5, 0.5);
        let default = Hsv::new(240.0, 1.0, 0.25);
        let config = PickerConfig::default().with_old_color(old);
        assert_eq!(config.initial_color(), old);
        let config = config.with_default_color(default);
        assert_eq!(config.initial_color(), default);
        assert_eq!(config.old_color, Some(old));
    }
}
