// File: crates/terminal-chart/src/types.rs
// Summary: Shared types and constants (canvas size, padding, stroke widths).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 720;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 320;
/// Margin between the canvas edge and the plot area, applied on all four sides.
pub const PADDING: f64 = 26.0;
/// Number of horizontal reference lines drawn across the plot area.
pub const GRIDLINES: usize = 6;

/// Pixel dimensions of the drawing surface.
/// Contract: both fields are positive; the renderer trusts this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f(&self) -> f64 { f64::from(self.width) }
    pub fn height_f(&self) -> f64 { f64::from(self.height) }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
