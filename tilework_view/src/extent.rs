// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::transform::TransformState;

/// Default preload margin in logical units.
///
/// Tiles within this distance beyond the viewport's lower/right edges are
/// still considered visible, to reduce pop-in while scrolling. The margin is
/// **not** applied to the upper/left edges; see [`is_visible`].
pub const DEFAULT_PRELOAD_MARGIN: f64 = 1000.0;

/// Visible area in logical (unscaled) canvas coordinates.
///
/// Derived from the measured container size and the current transform:
/// `width`/`height` are the container size divided by scale. The Y origin is
/// the sign-inverted pan offset converted into logical units
/// (`-position_y / scale`); the X origin is the raw sign-inverted pan offset
/// (`-position_x`, not divided by scale). The X convention is preserved
/// observable behavior from scroll-synced hosts and must not be "corrected"
/// independently of the culling rule built on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportExtent {
    /// Left edge of the viewport.
    pub left: f64,
    /// Top edge of the viewport in logical units.
    pub top: f64,
    /// Viewport width in logical units.
    pub width: f64,
    /// Viewport height in logical units.
    pub height: f64,
}

impl ViewportExtent {
    /// Derives the viewport extent from a transform and a measured container size.
    #[must_use]
    pub fn from_transform(transform: &TransformState, container: Size) -> Self {
        let scale = transform.scale;
        Self {
            left: -transform.position_x,
            top: -transform.position_y / scale,
            width: container.width / scale,
            height: container.height / scale,
        }
    }

    /// Returns the right edge (`left + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Returns the bottom edge (`top + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Returns `true` if a tile anchored at `origin` is in the visible set.
///
/// The test is `origin.y < bottom + preload && origin.x < right + preload`:
/// only the trailing (lower/right) edges cull, with the preload margin
/// extending them. There is no leading-edge test, so tiles above or left of
/// the viewport always remain in the set. Both asymmetries are preserved
/// observable behavior; do not symmetrize one without the other.
#[must_use]
pub fn is_visible(origin: Point, extent: &ViewportExtent, preload: f64) -> bool {
    origin.y < extent.bottom() + preload && origin.x < extent.right() + preload
}

/// Culls tile origins down to the visible-plus-preload subset.
///
/// Returns indices into `origins`, in ascending order. This is a plain linear
/// filter, recomputed from scratch on every transform change.
#[must_use]
pub fn visible_indices(origins: &[Point], extent: &ViewportExtent, preload: f64) -> Vec<usize> {
    origins
        .iter()
        .enumerate()
        .filter(|(_, origin)| is_visible(**origin, extent, preload))
        .map(|(index, _)| index)
        .collect()
}
