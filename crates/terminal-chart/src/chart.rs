// File: crates/terminal-chart/src/chart.rs
// Summary: Chart ties the series store to the renderer and the current canvas size.

use crate::draw::DrawContext;
use crate::renderer::{ChartLayout, ChartRenderer, RenderOptions};
use crate::series::Series;
use crate::store::SeriesStore;
use crate::types::CanvasSize;

pub struct Chart {
    store: SeriesStore,
    renderer: ChartRenderer,
    size: CanvasSize,
}

impl Chart {
    pub fn new(size: CanvasSize, options: RenderOptions) -> Self {
        Self {
            store: SeriesStore::new(),
            renderer: ChartRenderer::new(options),
            size,
        }
    }

    /// Install a new series; the previous one is dropped.
    pub fn replace(&mut self, series: impl Into<Series>) {
        self.store.replace(series);
    }

    pub fn current(&self) -> &[f64] {
        self.store.current()
    }

    pub fn size(&self) -> CanvasSize { self.size }

    pub fn resize(&mut self, size: CanvasSize) {
        self.size = size;
    }

    /// Repaint `ctx` from whatever series the store holds right now.
    pub fn redraw<C: DrawContext + ?Sized>(&self, ctx: &mut C) -> ChartLayout {
        self.renderer.draw(ctx, self.store.current(), self.size)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(CanvasSize::default(), RenderOptions::default())
    }
}
