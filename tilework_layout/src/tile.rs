// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// Per-cell tile identifier, unique within a grid.
///
/// Keys are derived from grid coordinates rather than allocated, so two
/// passes over the same [`GridSpec`](crate::GridSpec) produce identical keys.
/// The `Display` form is the cell coordinate pair, e.g. `(0,3)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileKey {
    /// Zero-based column index.
    pub column: u32,
    /// Zero-based row index.
    pub row: u32,
}

impl TileKey {
    /// Creates a key for the given cell.
    #[must_use]
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

/// One positioned unit of content on the logical canvas.
///
/// A tile records only its top-left corner; its extent is implied by the
/// [`GridSpec`](crate::GridSpec) that produced it. The content type `T` is
/// opaque: the canvas layer culls tiles by origin and never inspects or
/// mutates `content`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile<T> {
    /// Top-left corner in logical canvas coordinates.
    pub origin: Point,
    /// Unique per-cell key.
    pub key: TileKey,
    /// Opaque content, owned by the caller.
    pub content: T,
}

impl<T> Tile<T> {
    /// Creates a tile at `origin` with the given key and content.
    #[must_use]
    pub fn new(origin: Point, key: TileKey, content: T) -> Self {
        Self {
            origin,
            key,
            content,
        }
    }
}
