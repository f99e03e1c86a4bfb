// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};

use tilework_layout::Tile;
use tilework_view::{
    ScrollGeometry, TransformState, ViewportExtent, VisibleSet, visible_indices,
};

use crate::engine::TransformEngine;
use crate::options::CanvasOptions;
use crate::reconcile::reconcile_scroll;
use crate::surface::ScrollSurface;

/// Virtual canvas controller.
///
/// Owns the viewport-derived state (visible set, last computed extent and
/// scroll geometry) and the attachments to the two external subsystems. Tile
/// content stays with the caller: the canvas records only tile origins and
/// reports visibility as indices into the caller's list.
///
/// Handlers are the continuous synchronization loop described in the crate
/// docs; each one no-ops until both attachments are present.
#[derive(Debug)]
pub struct VirtualCanvas<E, S> {
    content_size: Size,
    origins: Vec<Point>,
    options: CanvasOptions,
    visible: VisibleSet,
    engine: Option<E>,
    surface: Option<S>,
    last_extent: Option<ViewportExtent>,
    last_geometry: Option<ScrollGeometry>,
}

impl<E: TransformEngine, S: ScrollSurface> VirtualCanvas<E, S> {
    /// Creates a canvas over a logical content area of `content_size`.
    #[must_use]
    pub fn new(content_size: Size, options: CanvasOptions) -> Self {
        Self {
            content_size,
            origins: Vec::new(),
            options,
            visible: VisibleSet::new(),
            engine: None,
            surface: None,
            last_extent: None,
            last_geometry: None,
        }
    }

    /// Records the tile list to cull.
    ///
    /// Only origins are copied; content and keys remain with the caller, and
    /// [`VirtualCanvas::visible`] indexes into the same order as `tiles`.
    pub fn set_tiles<T>(&mut self, tiles: &[Tile<T>]) {
        self.origins = tiles.iter().map(|tile| tile.origin).collect();
    }

    /// Records tile origins directly, for hosts that never build full tiles.
    pub fn set_origins(&mut self, origins: Vec<Point>) {
        self.origins = origins;
    }

    /// Attaches the transform engine, forwarding the canvas options to it.
    pub fn attach_engine(&mut self, mut engine: E) {
        engine.configure(&self.options);
        self.engine = Some(engine);
    }

    /// Attaches the native scroll surface.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Returns the attached engine, if any.
    #[must_use]
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    /// Returns the attached engine mutably, if any.
    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    /// Returns the attached surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Returns the attached surface mutably, if any.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Returns the logical content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the canvas options.
    #[must_use]
    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    /// Returns the currently realized tile subset.
    #[must_use]
    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    /// Handles a transform change (engine init or any pan/zoom/scroll-driven
    /// update).
    ///
    /// Recomputes the logical viewport extent from the engine state and the
    /// surface's measured size, culls the tile list, applies the configured
    /// change policy, and pushes the scaled content size and sign-inverted
    /// offsets back to the scroll surface so the native scrollbar tracks the
    /// engine's pan.
    ///
    /// Returns `true` if the visible set was replaced and the host should
    /// re-render.
    pub fn on_transformed(&mut self) -> bool {
        let Some(engine) = self.engine.as_ref() else {
            return false;
        };
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };

        let state = engine.transform_state();
        let extent = ViewportExtent::from_transform(&state, surface.viewport_size());
        let candidate = visible_indices(&self.origins, &extent, self.options.preload_margin);
        let replaced = self.visible.update(candidate, self.options.change_policy);

        let geometry = ScrollGeometry::from_transform(self.content_size, &state);
        surface.set_content_size(geometry.content_size);
        surface.set_scroll_offset(geometry.offset);

        self.last_extent = Some(extent);
        self.last_geometry = Some(geometry);
        replaced
    }

    /// Handles a native scroll event.
    ///
    /// Reads the surface's offsets and, when they diverge from the engine's
    /// (rounded, sign-inverted), pushes the scroll-derived offsets into the
    /// engine with zero duration, preserving scale. See
    /// [`reconcile_scroll`](crate::reconcile_scroll) for the comparison and
    /// the X-axis sign rule.
    pub fn on_scroll(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        let state = engine.transform_state();
        if let Some(correction) = reconcile_scroll(surface.scroll_offset(), &state) {
            engine.set_transform(
                correction.position_x,
                correction.position_y,
                correction.scale,
                0,
            );
        }
    }

    /// Handles a host container resize.
    ///
    /// Forces the engine to re-apply its current zoom via a no-distance zoom,
    /// which re-fires the transformed callback and recomputes all
    /// viewport-dependent values against the new measured size.
    pub fn on_resize(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.zoom_in(0.0, 0);
    }

    /// Snapshot of the current canvas state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CanvasDebugInfo {
        CanvasDebugInfo {
            content_size: self.content_size,
            tile_count: self.origins.len(),
            transform: self.engine.as_ref().map(TransformEngine::transform_state),
            extent: self.last_extent,
            scroll_geometry: self.last_geometry,
            visible_len: self.visible.len(),
        }
    }
}

/// Debug snapshot of a [`VirtualCanvas`] state.
#[derive(Clone, Copy, Debug)]
pub struct CanvasDebugInfo {
    /// Logical content size.
    pub content_size: Size,
    /// Number of tiles registered for culling.
    pub tile_count: usize,
    /// Engine transform state, if an engine is attached.
    pub transform: Option<TransformState>,
    /// Viewport extent from the most recent transform change.
    pub extent: Option<ViewportExtent>,
    /// Scroll geometry from the most recent transform change.
    pub scroll_geometry: Option<ScrollGeometry>,
    /// Number of currently realized tiles.
    pub visible_len: usize,
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Size, Vec2};

    use tilework_layout::GridSpec;
    use tilework_view::{ChangePolicy, TransformState};

    use super::VirtualCanvas;
    use crate::engine::TransformEngine;
    use crate::options::CanvasOptions;
    use crate::surface::ScrollSurface;

    #[derive(Debug, Default)]
    struct FakeEngine {
        state: TransformState,
        set_transform_calls: Vec<(f64, f64, f64, u32)>,
        zoom_in_calls: Vec<(f64, u32)>,
        configured: Option<CanvasOptions>,
    }

    impl TransformEngine for FakeEngine {
        fn transform_state(&self) -> TransformState {
            self.state
        }

        fn set_transform(&mut self, x: f64, y: f64, scale: f64, duration_ms: u32) {
            self.set_transform_calls.push((x, y, scale, duration_ms));
            self.state = TransformState::new(scale, x, y);
        }

        fn zoom_in(&mut self, step: f64, duration_ms: u32) {
            self.zoom_in_calls.push((step, duration_ms));
        }

        fn configure(&mut self, options: &CanvasOptions) {
            self.configured = Some(*options);
        }
    }

    #[derive(Debug)]
    struct FakeSurface {
        viewport: Size,
        offset: Vec2,
        content: Size,
    }

    impl FakeSurface {
        fn new(viewport: Size) -> Self {
            Self {
                viewport,
                offset: Vec2::ZERO,
                content: Size::ZERO,
            }
        }
    }

    impl ScrollSurface for FakeSurface {
        fn viewport_size(&self) -> Size {
            self.viewport
        }

        fn scroll_offset(&self) -> Vec2 {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: Vec2) {
            self.offset = offset;
        }

        fn set_content_size(&mut self, size: Size) {
            self.content = size;
        }
    }

    fn column_canvas() -> VirtualCanvas<FakeEngine, FakeSurface> {
        // The reference scenario: 50 tiles of 290x490 stacked vertically.
        let grid = GridSpec::column(290.0, 490.0, 50);
        let tiles = grid.tiles(|key| key.row);
        let mut canvas = VirtualCanvas::new(grid.content_size(), CanvasOptions::default());
        canvas.set_tiles(&tiles);
        canvas
    }

    #[test]
    fn handlers_no_op_without_attachments() {
        let mut canvas = column_canvas();
        assert!(!canvas.on_transformed());
        canvas.on_scroll();
        canvas.on_resize();
        assert!(canvas.visible().is_empty());

        // Engine alone is not enough for a transform pass either.
        canvas.attach_engine(FakeEngine::default());
        assert!(!canvas.on_transformed());
    }

    #[test]
    fn attach_engine_forwards_options() {
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        let configured = canvas.engine().unwrap().configured.unwrap();
        assert_eq!(configured.max_scale, 2.0);
    }

    #[test]
    fn transform_pass_culls_and_syncs_scroll_geometry() {
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));

        assert!(canvas.on_transformed());
        assert_eq!(canvas.visible().indices(), [0, 1, 2, 3]);

        let surface = canvas.surface().unwrap();
        assert_eq!(surface.content, Size::new(290.0, 24_500.0));
        assert_eq!(surface.offset, Vec2::ZERO);
    }

    #[test]
    fn transform_pass_is_idempotent() {
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));

        canvas.on_transformed();
        let first: Vec<usize> = canvas.visible().indices().to_vec();
        let first_content = canvas.surface().unwrap().content;

        // Same transform and container size: same results, no replacement.
        assert!(!canvas.on_transformed());
        assert_eq!(canvas.visible().indices(), first);
        assert_eq!(canvas.surface().unwrap().content, first_content);
    }

    #[test]
    fn zooming_out_admits_more_tiles_and_shrinks_scroll_content() {
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));
        canvas.on_transformed();
        let at_full = canvas.visible().len();

        canvas.engine_mut().unwrap().state = TransformState::new(0.5, 0.0, 0.0);
        assert!(canvas.on_transformed());
        assert!(canvas.visible().len() > at_full, "zoom out must not cull");
        assert_eq!(canvas.visible().indices(), [0, 1, 2, 3, 4, 5]);
        assert_eq!(canvas.surface().unwrap().content, Size::new(145.0, 12_250.0));
    }

    #[test]
    fn scroll_event_round_trips_through_the_engine() {
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));

        canvas.surface_mut().unwrap().offset = Vec2::new(0.0, 2000.0);
        canvas.on_scroll();

        let engine = canvas.engine().unwrap();
        assert_eq!(engine.state.position_y, -2000.0);
        assert_eq!(engine.set_transform_calls.len(), 1);
        // Correction is applied immediately, not animated.
        assert_eq!(engine.set_transform_calls[0].3, 0);

        // Already reconciled: a second scroll event writes nothing.
        canvas.on_scroll();
        assert_eq!(canvas.engine().unwrap().set_transform_calls.len(), 1);
    }

    #[test]
    fn scroll_then_transform_realizes_further_tiles() {
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));
        canvas.on_transformed();

        canvas.surface_mut().unwrap().offset = Vec2::new(0.0, 5000.0);
        canvas.on_scroll();
        // The engine fires its transformed callback after the corrective
        // write; the host relays it.
        assert!(canvas.on_transformed());

        // Viewport now spans logical 5000..5800; cutoff at 6800.
        assert_eq!(canvas.visible().len(), 14);
        assert_eq!(canvas.surface().unwrap().offset, Vec2::new(0.0, 5000.0));
    }

    #[test]
    fn resize_requests_a_no_distance_zoom_rebroadcast() {
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));
        canvas.on_transformed();

        canvas.on_resize();
        assert_eq!(canvas.engine().unwrap().zoom_in_calls, [(0.0, 0)]);

        // Host grows the container and relays the re-broadcast transform
        // event; the visible set follows the new measured size.
        canvas.surface_mut().unwrap().viewport = Size::new(400.0, 2000.0);
        assert!(canvas.on_transformed());
        assert_eq!(canvas.visible().len(), 7);
    }

    #[test]
    fn panning_down_grows_the_realized_prefix() {
        // Tiles before the viewport are never culled, so the realized set is
        // always a prefix and every pan that changes it changes its length.
        // That is what makes the default length-only policy lossless here.
        let mut canvas = column_canvas();
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));
        canvas.on_transformed();
        assert_eq!(canvas.visible().indices(), [0, 1, 2, 3]);

        canvas.engine_mut().unwrap().state = TransformState::new(1.0, 0.0, -490.0);
        assert!(canvas.on_transformed());
        assert_eq!(canvas.visible().indices(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn exact_policy_is_wired_through_options() {
        let grid = GridSpec::column(290.0, 490.0, 50);
        let tiles = grid.tiles(|key| key.row);
        let mut canvas: VirtualCanvas<FakeEngine, FakeSurface> = VirtualCanvas::new(
            grid.content_size(),
            CanvasOptions::default().change_policy(ChangePolicy::Exact),
        );
        canvas.set_tiles(&tiles);
        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));
        canvas.on_transformed();

        canvas.engine_mut().unwrap().state = TransformState::new(1.0, 0.0, -490.0);
        assert!(canvas.on_transformed());
        assert_eq!(canvas.visible().indices(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn debug_info_reflects_the_last_pass() {
        let mut canvas = column_canvas();
        let info = canvas.debug_info();
        assert_eq!(info.tile_count, 50);
        assert!(info.transform.is_none());
        assert!(info.extent.is_none());

        canvas.attach_engine(FakeEngine::default());
        canvas.attach_surface(FakeSurface::new(Size::new(400.0, 800.0)));
        canvas.on_transformed();

        let info = canvas.debug_info();
        assert_eq!(info.visible_len, 4);
        assert_eq!(info.transform.unwrap().scale, 1.0);
        assert_eq!(info.extent.unwrap().height, 800.0);
        assert_eq!(
            info.scroll_geometry.unwrap().content_size,
            Size::new(290.0, 24_500.0)
        );
    }
}
