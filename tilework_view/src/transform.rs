// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pan/zoom transform applied to the logical canvas.
///
/// `scale` is the uniform zoom factor; `position_x`/`position_y` are the pan
/// offsets in device pixels, using the transform engine's convention where
/// panning content up and to the left drives the offsets negative. The state
/// is mutated exclusively by the transform engine; everything in this crate
/// only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal pan offset in device pixels.
    pub position_x: f64,
    /// Vertical pan offset in device pixels.
    pub position_y: f64,
}

impl TransformState {
    /// Unzoomed, unpanned transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        position_x: 0.0,
        position_y: 0.0,
    };

    /// Creates a transform state from a scale and pan offsets.
    #[must_use]
    pub fn new(scale: f64, position_x: f64, position_y: f64) -> Self {
        Self {
            scale,
            position_x,
            position_y,
        }
    }

    /// Returns the screen-space form of this transform, snapped to whole pixels.
    #[must_use]
    pub fn screen_transform(&self) -> ScreenTransform {
        ScreenTransform {
            x: round_to_pixel(self.position_x),
            y: round_to_pixel(self.position_y),
            scale: self.scale,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Screen-space transform with pixel-snapped offsets.
///
/// This is the formatter hosts hand to their transform engine so rendered
/// content lands on whole device pixels: offsets are rounded, scale is passed
/// through untouched (the `translate3d(round(x), round(y), 0) scale(s)`
/// shape of a compositor transform).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    /// Horizontal translation in whole device pixels.
    pub x: f64,
    /// Vertical translation in whole device pixels.
    pub y: f64,
    /// Uniform scale factor, not rounded.
    pub scale: f64,
}

/// Rounds a device-space coordinate to the nearest whole pixel.
///
/// Scroll offsets and pan offsets from the two synchronized subsystems are
/// compared in this rounded form.
#[must_use]
pub fn round_to_pixel(value: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        value.round()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::round(value)
    }
}
