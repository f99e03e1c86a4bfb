// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping native scrollbars honest while pinch-zooming.
//!
//! Zooms the canvas out step by step and prints how the realized tile count
//! grows while the scroll container shrinks to `content × scale`, keeping
//! scrollbar proportions correct.
//!
//! Run:
//! - `cargo run -p tilework_demos --example zoom_sync`

use kurbo::Size;
use tilework_canvas::{CanvasOptions, TransformEngine, VirtualCanvas};
use tilework_demos::{SimEngine, SimSurface};
use tilework_layout::GridSpec;

fn main() {
    let grid = GridSpec::column(290.0, 490.0, 50);
    let tiles = grid.tiles(|key| key.row);

    let mut canvas = VirtualCanvas::new(grid.content_size(), CanvasOptions::default());
    canvas.set_tiles(&tiles);
    canvas.attach_engine(SimEngine::new());
    canvas.attach_surface(SimSurface::new(Size::new(400.0, 800.0)));

    for scale in [1.0, 0.75, 0.5, 0.25, 0.1] {
        let engine = canvas.engine_mut().expect("engine attached");
        engine.pinch_to(scale);
        engine.take_broadcast();
        canvas.on_transformed();

        let engine = canvas.engine().expect("engine attached");
        let screen = engine.screen_transform();
        let content = canvas
            .surface()
            .expect("surface attached")
            .content_size();
        println!(
            "scale {scale}: {} tiles realized, scroll content {:.0}x{:.0}, screen transform ({}, {}) x{}",
            canvas.visible().len(),
            content.width,
            content.height,
            screen.x,
            screen.y,
            screen.scale,
        );
    }
}
