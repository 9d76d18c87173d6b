// File: crates/terminal-chart/src/draw.rs
// Summary: Minimal 2D path/stroke capability the renderer draws through, plus a recording impl.

use crate::geometry::Point;
use crate::theme::Color;

/// The vector-drawing primitives the chart needs from a surface.
///
/// Paths follow canvas semantics: `begin_path` discards the pending path,
/// `move_to` starts a subpath, `line_to` extends it, `stroke` paints it with
/// the current stroke style and line width.
pub trait DrawContext {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

impl<T: DrawContext + ?Sized> DrawContext for &mut T {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) { (**self).clear_rect(x, y, width, height) }
    fn set_stroke_style(&mut self, color: Color) { (**self).set_stroke_style(color) }
    fn set_line_width(&mut self, width: f64) { (**self).set_line_width(width) }
    fn begin_path(&mut self) { (**self).begin_path() }
    fn move_to(&mut self, x: f64, y: f64) { (**self).move_to(x, y) }
    fn line_to(&mut self, x: f64, y: f64) { (**self).line_to(x, y) }
    fn stroke(&mut self) { (**self).stroke() }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeStyle(Color),
    LineWidth(f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
}

/// One painted path as it would appear on screen: its points in order and the
/// style in effect when `stroke` was called.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedStroke {
    pub color: Color,
    pub width: f64,
    pub points: Vec<Point>,
}

/// `DrawContext` that records calls instead of painting.
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self { Self::default() }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn clear(&mut self) { self.commands.clear(); }

    /// Replay the recorded commands and collect every stroked path.
    ///
    /// Points of all subpaths in a path are concatenated, which is enough for
    /// the single-subpath shapes the chart emits.
    pub fn strokes(&self) -> Vec<RecordedStroke> {
        let mut color = Color::from_rgb(0, 0, 0);
        let mut width = 1.0;
        let mut path: Vec<Point> = Vec::new();
        let mut out = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::ClearRect { .. } => {}
                DrawCommand::StrokeStyle(c) => color = c,
                DrawCommand::LineWidth(w) => width = w,
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => path.push(p),
                DrawCommand::Stroke => out.push(RecordedStroke { color, width, points: path.clone() }),
            }
        }
        out
    }
}

impl DrawContext for RecordingContext {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }
    fn set_stroke_style(&mut self, color: Color) { self.commands.push(DrawCommand::StrokeStyle(color)); }
    fn set_line_width(&mut self, width: f64) { self.commands.push(DrawCommand::LineWidth(width)); }
    fn begin_path(&mut self) { self.commands.push(DrawCommand::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.commands.push(DrawCommand::MoveTo(Point::new(x, y))); }
    fn line_to(&mut self, x: f64, y: f64) { self.commands.push(DrawCommand::LineTo(Point::new(x, y))); }
    fn stroke(&mut self) { self.commands.push(DrawCommand::Stroke); }
}
