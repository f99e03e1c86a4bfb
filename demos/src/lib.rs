// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared simulation harness for the Tilework demos.
//!
//! Real hosts pair [`tilework_canvas::VirtualCanvas`] with an actual pan/zoom
//! engine and a native scroll container. The demos drive the same controller
//! headlessly: [`SimEngine`] stands in for the transform engine (including
//! its fire-a-callback-after-every-update contract, surfaced here as
//! [`SimEngine::take_broadcast`]) and [`SimSurface`] stands in for the scroll
//! container.

use kurbo::{Size, Vec2};
use tilework_canvas::{CanvasOptions, ScrollSurface, TransformEngine};
use tilework_view::TransformState;

/// Simulated pan/zoom transform engine.
///
/// Clamps scale to the configured bounds and records that a transformed
/// callback is pending after every update, the way real engines notify their
/// host. Drivers poll [`SimEngine::take_broadcast`] after each action and
/// relay it to `VirtualCanvas::on_transformed`.
#[derive(Debug)]
pub struct SimEngine {
    state: TransformState,
    min_scale: f64,
    max_scale: f64,
    broadcast_pending: bool,
}

impl SimEngine {
    /// Creates an engine at the identity transform, broadcast pending
    /// (engines fire their callback once on init).
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TransformState::IDENTITY,
            min_scale: 0.1,
            max_scale: 2.0,
            broadcast_pending: true,
        }
    }

    /// Zooms to `scale` about the viewport origin, as a pinch gesture would.
    pub fn pinch_to(&mut self, scale: f64) {
        self.state.scale = scale.clamp(self.min_scale, self.max_scale);
        self.broadcast_pending = true;
    }

    /// Returns `true` once per pending transformed callback.
    pub fn take_broadcast(&mut self) -> bool {
        core::mem::take(&mut self.broadcast_pending)
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine for SimEngine {
    fn transform_state(&self) -> TransformState {
        self.state
    }

    fn set_transform(&mut self, position_x: f64, position_y: f64, scale: f64, _duration_ms: u32) {
        self.state =
            TransformState::new(scale.clamp(self.min_scale, self.max_scale), position_x, position_y);
        self.broadcast_pending = true;
    }

    fn zoom_in(&mut self, step: f64, _duration_ms: u32) {
        if step != 0.0 {
            self.pinch_to(self.state.scale * (1.0 + step));
        }
        // Even a no-distance zoom re-fires the callback.
        self.broadcast_pending = true;
    }

    fn configure(&mut self, options: &CanvasOptions) {
        self.min_scale = options.min_scale;
        self.max_scale = options.max_scale;
        self.state.scale = options.initial_scale;
    }
}

/// Simulated native scroll container.
#[derive(Debug)]
pub struct SimSurface {
    viewport: Size,
    offset: Vec2,
    content: Size,
}

impl SimSurface {
    /// Creates a surface with the given measured viewport size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            offset: Vec2::ZERO,
            content: Size::ZERO,
        }
    }

    /// Simulates the user scrolling to the given offsets.
    pub fn user_scroll_to(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Simulates a window resize changing the measured viewport.
    pub fn resize_to(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns the scrollable content size last pushed by the canvas.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }
}

impl ScrollSurface for SimSurface {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }
}
