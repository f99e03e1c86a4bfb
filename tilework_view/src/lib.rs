// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tilework_view --heading-base-level=0

//! Tilework View: coordinate mapping and tile-visibility culling.
//!
//! This crate provides the small, headless core of a virtualized tiled
//! canvas: given a pan/zoom [`TransformState`] and a measured container size,
//! it derives the logical [`ViewportExtent`], culls a tile list down to the
//! visible-plus-preload subset, and computes the [`ScrollGeometry`] that keeps
//! a native scroll container's scrollbars proportional to the zoomed content.
//!
//! It does **not** own tiles, widgets, or any rendering backend. Callers are
//! expected to:
//! - Own the tile list (see `tilework_layout`) and hand in tile origins.
//! - Wire transform/scroll/resize events into the controller layer
//!   (`tilework_canvas`), which calls into this crate on every change.
//! - Apply the returned [`ScrollGeometry`] to their native scroll container.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tilework_view::{
//!     DEFAULT_PRELOAD_MARGIN, TransformState, ViewportExtent, visible_indices,
//! };
//!
//! // 50 tiles stacked vertically, 490 logical pixels apart.
//! let origins: Vec<Point> = (0..50).map(|row| Point::new(0.0, f64::from(row) * 490.0)).collect();
//!
//! // Unzoomed view in an 800px-tall container.
//! let transform = TransformState::IDENTITY;
//! let extent = ViewportExtent::from_transform(&transform, Size::new(400.0, 800.0));
//!
//! let visible = visible_indices(&origins, &extent, DEFAULT_PRELOAD_MARGIN);
//! assert_eq!(visible, vec![0, 1, 2, 3]);
//! ```
//!
//! ## Design notes
//!
//! - The visible subset is recomputed from scratch on every transform change;
//!   there is no incremental update.
//! - The preload margin extends only the trailing (lower/right) viewport
//!   edges, and tiles before the viewport are never culled at all. Both are
//!   preserved observable behavior; see [`DEFAULT_PRELOAD_MARGIN`] and
//!   [`is_visible`].
//! - Change detection between successive visible sets is an explicit
//!   [`ChangePolicy`] rather than a hard-coded rule.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("tilework_view requires either the `std` or `libm` feature");

mod extent;
mod scroll;
mod transform;
mod visible_set;

pub use extent::{DEFAULT_PRELOAD_MARGIN, ViewportExtent, is_visible, visible_indices};
pub use scroll::ScrollGeometry;
pub use transform::{ScreenTransform, TransformState, round_to_pixel};
pub use visible_set::{ChangePolicy, VisibleSet};
