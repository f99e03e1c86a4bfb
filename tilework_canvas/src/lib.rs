// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tilework_canvas --heading-base-level=0

//! Tilework Canvas: the virtual canvas controller.
//!
//! This crate keeps a native scrollable container and an independent pan/zoom
//! transform engine synchronized over one logical viewport, and culls a tile
//! list down to the subset worth realizing. Both externals are trait seams:
//!
//! - [`TransformEngine`]: the pan/zoom engine owning scale and pan offsets.
//!   It is authoritative for zoom level.
//! - [`ScrollSurface`]: the native scroll container exposing its measured
//!   size, scroll offsets, and settable content size. It is authoritative for
//!   user-initiated scrolling.
//!
//! [`VirtualCanvas`] reconciles the two bidirectionally. Hosts deliver
//! events in arrival order on their UI thread:
//!
//! - transform changed (engine init or any pan/zoom update) →
//!   [`VirtualCanvas::on_transformed`]
//! - native scroll event → [`VirtualCanvas::on_scroll`]
//! - container resized → [`VirtualCanvas::on_resize`]
//!
//! There is no discrete state machine and no failure taxonomy: a handler
//! whose external attachment is missing no-ops, and any inconsistency
//! self-corrects on the next event.
//!
//! ## Minimal example
//!
//! ```rust
//! use tilework_canvas::{CanvasOptions, ScrollSurface, TransformEngine, VirtualCanvas};
//! use tilework_layout::GridSpec;
//! use tilework_view::TransformState;
//! use kurbo::{Size, Vec2};
//!
//! struct Engine(TransformState);
//! impl TransformEngine for Engine {
//!     fn transform_state(&self) -> TransformState {
//!         self.0
//!     }
//!     fn set_transform(&mut self, x: f64, y: f64, scale: f64, _duration_ms: u32) {
//!         self.0 = TransformState::new(scale, x, y);
//!     }
//!     fn zoom_in(&mut self, _step: f64, _duration_ms: u32) {}
//! }
//!
//! struct Surface {
//!     viewport: Size,
//!     offset: Vec2,
//!     content: Size,
//! }
//! impl ScrollSurface for Surface {
//!     fn viewport_size(&self) -> Size {
//!         self.viewport
//!     }
//!     fn scroll_offset(&self) -> Vec2 {
//!         self.offset
//!     }
//!     fn set_scroll_offset(&mut self, offset: Vec2) {
//!         self.offset = offset;
//!     }
//!     fn set_content_size(&mut self, size: Size) {
//!         self.content = size;
//!     }
//! }
//!
//! let grid = GridSpec::column(290.0, 490.0, 50);
//! let tiles = grid.tiles(|key| key.row);
//!
//! let mut canvas = VirtualCanvas::new(grid.content_size(), CanvasOptions::default());
//! canvas.set_tiles(&tiles);
//! canvas.attach_engine(Engine(TransformState::IDENTITY));
//! canvas.attach_surface(Surface {
//!     viewport: Size::new(400.0, 800.0),
//!     offset: Vec2::ZERO,
//!     content: Size::ZERO,
//! });
//!
//! canvas.on_transformed();
//! assert_eq!(canvas.visible().indices(), [0, 1, 2, 3]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod engine;
mod lifecycle;
mod options;
mod reconcile;
mod surface;

pub use canvas::{CanvasDebugInfo, VirtualCanvas};
pub use engine::TransformEngine;
pub use lifecycle::ResizeObservation;
pub use options::{ActivationKeys, CanvasOptions};
pub use reconcile::{ScrollCorrection, reconcile_scroll};
pub use surface::ScrollSurface;
