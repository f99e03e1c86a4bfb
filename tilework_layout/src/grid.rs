// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::tile::{Tile, TileKey};

/// Dense rectangular grid specification: tile size × tile count.
///
/// A grid describes `columns * rows` cells laid out row-major on the logical
/// canvas, with cell `(c, r)` anchored at `(c * tile_width, r * tile_height)`.
/// Producing tiles from a grid is a pure function of the spec and the content
/// factory; there are no error conditions and no side effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Width of one tile in logical units.
    pub tile_width: f64,
    /// Height of one tile in logical units.
    pub tile_height: f64,
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
}

impl GridSpec {
    /// Creates a grid of `columns` × `rows` tiles of the given size.
    #[must_use]
    pub fn new(tile_width: f64, tile_height: f64, columns: u32, rows: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            columns,
            rows,
        }
    }

    /// Creates a single-column grid of `rows` tiles.
    ///
    /// This is the tall-strip-of-images layout virtualized canvases most
    /// commonly host.
    #[must_use]
    pub fn column(tile_width: f64, tile_height: f64, rows: u32) -> Self {
        Self::new(tile_width, tile_height, 1, rows)
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the logical canvas size covered by the grid.
    ///
    /// This is the `content_size` the canvas layer scales by the current zoom
    /// factor to size its scroll container.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(
            f64::from(self.columns) * self.tile_width,
            f64::from(self.rows) * self.tile_height,
        )
    }

    /// Returns the top-left corner of cell `(column, row)`.
    #[must_use]
    pub fn cell_origin(&self, column: u32, row: u32) -> Point {
        Point::new(
            f64::from(column) * self.tile_width,
            f64::from(row) * self.tile_height,
        )
    }

    /// Produces the full tile list, row-major, invoking `content` once per cell.
    ///
    /// The returned order is stable: row 0 left to right, then row 1, and so
    /// on. Keys are unique per cell and derived from cell coordinates.
    #[must_use]
    pub fn tiles<T>(&self, mut content: impl FnMut(TileKey) -> T) -> Vec<Tile<T>> {
        let mut out = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for column in 0..self.columns {
                let key = TileKey::new(column, row);
                out.push(Tile::new(self.cell_origin(column, row), key, content(key)));
            }
        }
        out
    }

    /// Produces only the tile origins, row-major.
    ///
    /// Culling layers that never touch tile content can work from this
    /// cheaper form directly.
    #[must_use]
    pub fn origins(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for column in 0..self.columns {
                out.push(self.cell_origin(column, row));
            }
        }
        out
    }
}
