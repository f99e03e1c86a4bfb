// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::transform::TransformState;

/// Native scroll-container geometry derived from a transform.
///
/// Invariant: the scroll container's rendered size always equals the logical
/// content size multiplied by the current scale factor, so native scrollbar
/// proportions stay correct at every zoom level. The scroll offsets mirror
/// the engine's pan offsets, sign-inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    /// Scroll-container content size in device pixels (`content * scale`).
    pub content_size: Size,
    /// Scroll offsets in device pixels (`(-position_x, -position_y)`).
    pub offset: Vec2,
}

impl ScrollGeometry {
    /// Derives the scroll geometry for `content_size` under `transform`.
    #[must_use]
    pub fn from_transform(content_size: Size, transform: &TransformState) -> Self {
        Self {
            content_size: content_size * transform.scale,
            offset: Vec2::new(-transform.position_x, -transform.position_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::ScrollGeometry;
    use crate::transform::TransformState;

    #[test]
    fn content_size_scales_with_zoom() {
        let content = Size::new(290.0, 24_500.0);

        let unzoomed = ScrollGeometry::from_transform(content, &TransformState::IDENTITY);
        assert_eq!(unzoomed.content_size, content);

        let halved =
            ScrollGeometry::from_transform(content, &TransformState::new(0.5, 0.0, 0.0));
        assert_eq!(halved.content_size, Size::new(145.0, 12_250.0));
    }

    #[test]
    fn offsets_are_sign_inverted_pan() {
        let t = TransformState::new(1.0, -120.0, -3000.0);
        let geometry = ScrollGeometry::from_transform(Size::new(290.0, 24_500.0), &t);
        assert_eq!(geometry.offset, Vec2::new(120.0, 3000.0));
    }

    #[test]
    fn derivation_is_idempotent() {
        let content = Size::new(500.0, 500.0);
        let t = TransformState::new(2.0, -10.0, -20.0);
        assert_eq!(
            ScrollGeometry::from_transform(content, &t),
            ScrollGeometry::from_transform(content, &t)
        );
    }
}
