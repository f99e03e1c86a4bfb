// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

use tilework_view::{ChangePolicy, DEFAULT_PRELOAD_MARGIN};

bitflags! {
    /// Modifier keys that gate wheel-driven zooming.
    ///
    /// With an allow-list set, plain wheel input scrolls the native container
    /// and only modified wheel input reaches the transform engine as zoom.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ActivationKeys: u8 {
        /// Control key.
        const CONTROL = 1 << 0;
        /// Alt/Option key.
        const ALT = 1 << 1;
        /// Shift key.
        const SHIFT = 1 << 2;
        /// Meta/Command key.
        const META = 1 << 3;
    }
}

/// Canvas configuration, passed in at construction.
///
/// Everything that used to be module-level mutable state lives here
/// explicitly: engine scale bounds and input gating (forwarded to the engine
/// via [`TransformEngine::configure`](crate::TransformEngine::configure)),
/// plus the culling margin and change-detection policy the canvas consults
/// itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasOptions {
    /// Minimum allowed scale factor.
    pub min_scale: f64,
    /// Maximum allowed scale factor.
    pub max_scale: f64,
    /// Scale applied before the first transform event.
    pub initial_scale: f64,
    /// Whether the engine clamps panning to the content bounds.
    pub limit_to_bounds: bool,
    /// Whether the engine suppresses its bounds padding.
    pub disable_padding: bool,
    /// Whether engine-side drag panning is disabled (scrolling pans instead).
    pub panning_disabled: bool,
    /// Modifier keys required for wheel-driven zooming.
    pub wheel_activation: ActivationKeys,
    /// Culling margin beyond the viewport's lower/right edges, in logical units.
    pub preload_margin: f64,
    /// Visible-set change-detection policy.
    pub change_policy: ChangePolicy,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 2.0,
            initial_scale: 1.0,
            limit_to_bounds: true,
            disable_padding: true,
            panning_disabled: true,
            wheel_activation: ActivationKeys::CONTROL,
            preload_margin: DEFAULT_PRELOAD_MARGIN,
            change_policy: ChangePolicy::default(),
        }
    }
}

impl CanvasOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both scale bounds.
    #[must_use]
    pub fn scale_range(mut self, min: f64, max: f64) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Sets the initial scale.
    #[must_use]
    pub fn initial_scale(mut self, scale: f64) -> Self {
        self.initial_scale = scale;
        self
    }

    /// Sets the wheel-zoom activation keys.
    #[must_use]
    pub fn wheel_activation(mut self, keys: ActivationKeys) -> Self {
        self.wheel_activation = keys;
        self
    }

    /// Sets the preload margin in logical units.
    #[must_use]
    pub fn preload_margin(mut self, margin: f64) -> Self {
        self.preload_margin = margin;
        self
    }

    /// Sets the visible-set change-detection policy.
    #[must_use]
    pub fn change_policy(mut self, policy: ChangePolicy) -> Self {
        self.change_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use tilework_view::{ChangePolicy, DEFAULT_PRELOAD_MARGIN};

    use super::{ActivationKeys, CanvasOptions};

    #[test]
    fn defaults_match_the_reference_configuration() {
        let options = CanvasOptions::default();
        assert_eq!(options.min_scale, 0.1);
        assert_eq!(options.max_scale, 2.0);
        assert_eq!(options.initial_scale, 1.0);
        assert!(options.limit_to_bounds);
        assert!(options.disable_padding);
        assert!(options.panning_disabled);
        assert_eq!(options.wheel_activation, ActivationKeys::CONTROL);
        assert_eq!(options.preload_margin, DEFAULT_PRELOAD_MARGIN);
        assert_eq!(options.change_policy, ChangePolicy::LengthOnly);
    }

    #[test]
    fn builder_setters_compose() {
        let options = CanvasOptions::new()
            .scale_range(0.25, 4.0)
            .preload_margin(500.0)
            .change_policy(ChangePolicy::Exact)
            .wheel_activation(ActivationKeys::CONTROL | ActivationKeys::SHIFT);
        assert_eq!(options.min_scale, 0.25);
        assert_eq!(options.max_scale, 4.0);
        assert_eq!(options.preload_margin, 500.0);
        assert_eq!(options.change_policy, ChangePolicy::Exact);
        assert!(options.wheel_activation.contains(ActivationKeys::SHIFT));
    }
}
