// File: crates/terminal-chart/src/renderer.rs
// Summary: ChartRenderer: series + canvas size -> gridlines and an auto-scaled polyline.

use crate::draw::DrawContext;
use crate::geometry::{Point, Rect, Segment};
use crate::grid::gridlines;
use crate::scale::{index_to_x, step_x, ValueScale};
use crate::series::min_max;
use crate::theme::Theme;
use crate::types::{CanvasSize, PADDING};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub padding: f64,
    pub grid_width: f64,
    pub line_width: f64,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: PADDING,
            grid_width: 1.0,
            line_width: 2.0,
            theme: Theme::terminal(),
        }
    }
}

/// Screen-space geometry for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub bounds: Rect,
    pub gridlines: Vec<Segment>,
    /// One point per sample in series order; empty for an empty series.
    pub polyline: Vec<Point>,
    pub step_x: f64,
    /// `(min, max)` of the series, `None` when it is empty.
    pub range: Option<(f64, f64)>,
}

/// Stateless between calls: the same input always yields the same layout and
/// the same stream of drawing calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartRenderer {
    pub options: RenderOptions,
}

impl ChartRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Compute gridlines and polyline without touching a surface.
    pub fn layout(&self, series: &[f64], size: CanvasSize) -> ChartLayout {
        let pad = self.options.padding;
        let (width, height) = (size.width_f(), size.height_f());
        let step = step_x(width, pad, series.len());
        let range = min_max(series);

        let polyline = match range {
            Some((min, max)) => {
                let scale = ValueScale::new(min, max, height, pad);
                series
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Point::new(index_to_x(i, pad, step), scale.to_px(v)))
                    .collect()
            }
            None => Vec::new(),
        };

        ChartLayout {
            bounds: Rect::from_ltwh(0.0, 0.0, width, height),
            gridlines: gridlines(width, height, pad),
            polyline,
            step_x: step,
            range,
        }
    }

    /// Clear the surface and paint gridlines, then the series polyline.
    pub fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, series: &[f64], size: CanvasSize) -> ChartLayout {
        let layout = self.layout(series, size);
        self.paint(ctx, &layout);
        log::trace!(
            "chart drawn: {}x{}, {} samples, range {:?}",
            size.width,
            size.height,
            series.len(),
            layout.range
        );
        layout
    }

    /// Replay a precomputed layout onto `ctx`.
    pub fn paint<C: DrawContext + ?Sized>(&self, ctx: &mut C, layout: &ChartLayout) {
        let opts = &self.options;
        let b = layout.bounds;
        ctx.clear_rect(b.left, b.top, b.width(), b.height());

        ctx.set_stroke_style(opts.theme.grid);
        ctx.set_line_width(opts.grid_width);
        for line in &layout.gridlines {
            ctx.begin_path();
            ctx.move_to(line.from.x, line.from.y);
            ctx.line_to(line.to.x, line.to.y);
            ctx.stroke();
        }

        // Nothing to scale against; gridlines only.
        let Some((first, rest)) = layout.polyline.split_first() else {
            return;
        };
        ctx.set_stroke_style(opts.theme.line_stroke);
        ctx.set_line_width(opts.line_width);
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.stroke();
    }
}
