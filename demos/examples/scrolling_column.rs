// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling a tall column of tiles through a small viewport.
//!
//! Reproduces the canonical scenario: 50 tiles of 290×490 stacked
//! vertically, viewed through a 400×800 container, driven by native scroll
//! events and a window resize.
//!
//! Run:
//! - `cargo run -p tilework_demos --example scrolling_column`

use kurbo::{Size, Vec2};
use tilework_canvas::{CanvasOptions, ResizeObservation, VirtualCanvas};
use tilework_demos::{SimEngine, SimSurface};
use tilework_layout::GridSpec;

fn pump(canvas: &mut VirtualCanvas<SimEngine, SimSurface>, label: &str) {
    // Relay the engine's transformed callback, as the host runtime would.
    while canvas
        .engine_mut()
        .is_some_and(SimEngine::take_broadcast)
    {
        canvas.on_transformed();
    }
    let info = canvas.debug_info();
    println!(
        "{label}: {} of {} tiles realized, scroll content {:?}",
        info.visible_len, info.tile_count, info.scroll_geometry.map(|g| g.content_size)
    );
}

fn main() {
    let grid = GridSpec::column(290.0, 490.0, 50);
    let tiles = grid.tiles(|key| format!("image {}", key.row + 1));

    let mut canvas = VirtualCanvas::new(grid.content_size(), CanvasOptions::default());
    canvas.set_tiles(&tiles);
    canvas.attach_engine(SimEngine::new());
    canvas.attach_surface(SimSurface::new(Size::new(400.0, 800.0)));

    // Mounting acquires the resize observation for the component's lifetime.
    let observation = ResizeObservation::acquire(|| println!("resize observer disconnected"));

    pump(&mut canvas, "initial");

    for scroll_y in [2000.0, 5000.0, 20_000.0] {
        canvas
            .surface_mut()
            .expect("surface attached")
            .user_scroll_to(Vec2::new(0.0, scroll_y));
        canvas.on_scroll();
        pump(&mut canvas, &format!("scrolled to {scroll_y}"));
    }

    // The window grows; the observer fires and the canvas forces a
    // no-distance zoom so viewport-dependent state recomputes.
    canvas
        .surface_mut()
        .expect("surface attached")
        .resize_to(Size::new(400.0, 2000.0));
    canvas.on_resize();
    pump(&mut canvas, "resized to 400x2000");

    observation.release();
}
