// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Seam for the host's native scrollable container.
///
/// The surface is authoritative for user-initiated scrolling: when the user
/// drags the scrollbar or wheels without the zoom modifier, the host fires a
/// scroll event and the canvas pulls the new offsets from here. In the other
/// direction, the canvas pushes content size and offsets back after every
/// transform change so scrollbar proportions and thumb position track the
/// zoomed content.
pub trait ScrollSurface {
    /// Returns the measured size of the visible container in device pixels.
    fn viewport_size(&self) -> Size;

    /// Returns the current scroll offsets in device pixels.
    fn scroll_offset(&self) -> Vec2;

    /// Sets the scroll offsets in device pixels.
    fn set_scroll_offset(&mut self, offset: Vec2);

    /// Sets the scrollable content size in device pixels.
    fn set_content_size(&mut self, size: Size);
}
