// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tilework_view::{ScreenTransform, TransformState};

use crate::options::CanvasOptions;

/// Seam for the external pan/zoom transform engine.
///
/// The engine owns the transform state and mutates it in response to input
/// gestures; the canvas only ever writes through [`TransformEngine::set_transform`]
/// with a zero duration when correcting scroll-driven drift. The engine is
/// expected to fire the host's transformed callback after initialization and
/// after every update (including updates it is handed here), at which point
/// the host calls [`VirtualCanvas::on_transformed`](crate::VirtualCanvas::on_transformed).
pub trait TransformEngine {
    /// Returns the current transform state.
    fn transform_state(&self) -> TransformState;

    /// Applies an absolute transform over `duration_ms` milliseconds.
    ///
    /// A zero duration means immediate application.
    fn set_transform(&mut self, position_x: f64, position_y: f64, scale: f64, duration_ms: u32);

    /// Zooms in by `step` around the current center.
    ///
    /// A zero step is the no-distance re-broadcast the canvas uses after a
    /// container resize: the transform is unchanged, but the engine must
    /// still fire the transformed callback.
    fn zoom_in(&mut self, step: f64, duration_ms: u32);

    /// Applies canvas options (scale bounds, input allow-list) at attach time.
    ///
    /// Engines with no configurable behavior can keep the default no-op.
    fn configure(&mut self, options: &CanvasOptions) {
        let _ = options;
    }

    /// Returns the pixel-snapped screen-space form of the current transform.
    fn screen_transform(&self) -> ScreenTransform {
        self.transform_state().screen_transform()
    }
}
