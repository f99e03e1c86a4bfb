// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tilework_layout --heading-base-level=0

//! Tilework Layout: tile layout provider for virtualized canvases.
//!
//! This crate computes flat lists of positioned tile records from a simple
//! grid specification. It is the leaf of the Tilework stack: no state, no
//! lifecycle, and no knowledge of viewports or scrolling.
//!
//! The core concepts are:
//!
//! - [`GridSpec`]: tile size × tile count, describing a dense rectangular grid
//!   on the logical canvas.
//! - [`TileKey`]: a per-cell `(column, row)` identifier, unique within a grid.
//! - [`Tile`]: one positioned unit of content; the content type is opaque to
//!   this crate and everything built on it.
//!
//! Hosts own the produced tile list and hand it (borrowed) to the canvas
//! layer, which culls it down to a visible subset per frame. Tiles are never
//! mutated after creation.
//!
//! ## Minimal example
//!
//! A single column of 50 tiles, each 290×490 logical pixels:
//!
//! ```rust
//! use tilework_layout::GridSpec;
//!
//! let grid = GridSpec::column(290.0, 490.0, 50);
//! let tiles = grid.tiles(|key| key.row + 1);
//!
//! assert_eq!(tiles.len(), 50);
//! assert_eq!(tiles[3].origin.y, 3.0 * 490.0);
//! assert_eq!(grid.content_size().height, 50.0 * 490.0);
//! ```
//!
//! All coordinates live in logical (unscaled) canvas units, typically logical
//! pixels. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod tile;

pub use grid::GridSpec;
pub use tile::{Tile, TileKey};
