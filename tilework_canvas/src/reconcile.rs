// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use tilework_view::{TransformState, round_to_pixel};

/// Corrective write produced by [`reconcile_scroll`].
///
/// Applied via [`TransformEngine::set_transform`](crate::TransformEngine::set_transform)
/// with a zero duration; `scale` is always the engine's current scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCorrection {
    /// New horizontal pan offset.
    pub position_x: f64,
    /// New vertical pan offset.
    pub position_y: f64,
    /// Unchanged scale, carried so the write can be absolute.
    pub scale: f64,
}

/// Compares the native scroll offsets against the engine's pan offsets and
/// returns the corrective transform write, if any.
///
/// Offsets are compared rounded to whole pixels, with the engine's offsets
/// sign-inverted into scroll space. When they differ, the correction carries
/// the scroll-derived offsets back into the engine's convention
/// (`-scroll`), preserving scale.
///
/// The X axis has an extra rule: when the engine's sign-inverted X offset is
/// negative, the correction re-asserts its positive form instead of adopting
/// the scroll value. The two subsystems disagree on the X offset's sign
/// convention in that region, and without this rule each write flips the
/// sign the other side then flips back, oscillating indefinitely. The rule
/// is one-directional and X-only; do not extend it to the Y axis.
#[must_use]
pub fn reconcile_scroll(scroll_offset: Vec2, transform: &TransformState) -> Option<ScrollCorrection> {
    let current_x = round_to_pixel(scroll_offset.x);
    let current_y = round_to_pixel(scroll_offset.y);
    let prev_x = round_to_pixel(-transform.position_x);
    let prev_y = round_to_pixel(-transform.position_y);

    if prev_x == current_x && prev_y == current_y {
        return None;
    }

    let position_x = if prev_x < 0.0 { -prev_x } else { -current_x };
    Some(ScrollCorrection {
        position_x,
        position_y: -current_y,
        scale: transform.scale,
    })
}
