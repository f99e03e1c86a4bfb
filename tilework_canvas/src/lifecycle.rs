// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Scoped handle for a host resize observation.
///
/// The observation is the one externally held resource in the system:
/// acquired when the canvas is mounted, released when it is unmounted. Hosts
/// wrap whatever their runtime's unsubscribe operation is in the release
/// closure; dropping the handle runs it exactly once.
///
/// ```rust
/// use tilework_canvas::ResizeObservation;
///
/// let mut disconnected = false;
/// {
///     let _observation = ResizeObservation::acquire(|| disconnected = true);
///     // ... deliver resize events while mounted ...
/// }
/// assert!(disconnected);
/// ```
pub struct ResizeObservation<R: FnOnce()> {
    release: Option<R>,
}

impl<R: FnOnce()> ResizeObservation<R> {
    /// Wraps the host's release operation in a scoped handle.
    #[must_use]
    pub fn acquire(release: R) -> Self {
        Self {
            release: Some(release),
        }
    }

    /// Releases the observation now instead of at end of scope.
    pub fn release(self) {}
}

impl<R: FnOnce()> Drop for ResizeObservation<R> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl<R: FnOnce()> fmt::Debug for ResizeObservation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeObservation")
            .field("active", &self.release.is_some())
            .finish()
    }
}
