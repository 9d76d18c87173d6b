// File: crates/terminal-chart/src/lib.rs
// Summary: Core library entry point; exports the series store, renderer and drawing capability.

pub mod chart;
pub mod draw;
pub mod geometry;
pub mod grid;
pub mod renderer;
pub mod scale;
pub mod series;
pub mod store;
pub mod theme;
pub mod types;

pub use chart::Chart;
pub use draw::{DrawCommand, DrawContext, RecordedStroke, RecordingContext};
pub use geometry::{Point, Segment};
pub use renderer::{ChartLayout, ChartRenderer, RenderOptions};
pub use scale::vertical_scale;
pub use series::Series;
pub use store::SeriesStore;
pub use theme::{Color, Theme};
pub use types::{CanvasSize, GRIDLINES, PADDING};
