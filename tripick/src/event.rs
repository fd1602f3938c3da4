// Copyright 2025 the Tripick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use tripick_color::Hsv;

/// Notification produced by a [`PickerSession`](crate::PickerSession) call.
#[derive(Clone, Debug, PartialEq)]
pub enum PickerEvent {
    /// The live color changed (every drag sample).
    Changed(Hsv),
    /// The color was confirmed, as `#rrggbb`.
    Committed(String),
    /// The reference swatch was tapped, as `#rrggbb`.
    OldColorSelected(String),
}

impl PickerEvent {
    /// The hex string carried by `Committed` and `OldColorSelected`.
    pub fn hex(&self) -> Option<&str> {
        match self {
            Self::Changed(_) => None,
            Self::Committed(hex) | Self::OldColorSelected(hex) => Some(hex),
        }
    }
}
