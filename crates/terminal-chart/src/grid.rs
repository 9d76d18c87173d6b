// File: crates/terminal-chart/src/grid.rs
// Summary: Horizontal gridline layout helpers.

use crate::geometry::Segment;
use crate::types::GRIDLINES;

/// The fixed set of horizontal reference lines spanning the padded plot area.
/// Independent of the data; always `GRIDLINES` segments.
pub fn gridlines(width: f64, height: f64, padding: f64) -> Vec<Segment> {
    let gap = (height - padding * 2.0) / (GRIDLINES - 1) as f64;
    (0..GRIDLINES)
        .map(|i| {
            let y = padding + gap * i as f64;
            Segment::horizontal(y, padding, width - padding)
        })
        .collect()
}
