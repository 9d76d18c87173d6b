// File: crates/terminal-chart/src/scale.rs
// Summary: Index (X) and value (Y) transforms from samples to canvas pixels.

/// Horizontal distance between consecutive samples.
///
/// The denominator is `len - 1`, clamped to 1 so that empty and single-sample
/// series do not divide by zero.
#[inline]
pub fn step_x(width: f64, padding: f64, len: usize) -> f64 {
    let gaps = len.saturating_sub(1).max(1);
    (width - padding * 2.0) / gaps as f64
}

/// Screen x of the sample at `index`.
#[inline]
pub fn index_to_x(index: usize, padding: f64, step: f64) -> f64 {
    padding + index as f64 * step
}

/// Map `v` into the padded vertical range, inverted so larger values plot higher.
///
/// `min` lands on `height - padding` and `max` on `padding`. When the series is
/// flat the span is taken as 1, so every point sits at `padding`.
#[inline]
pub fn vertical_scale(v: f64, min: f64, max: f64, height: f64, padding: f64) -> f64 {
    let span = max - min;
    let span = if span == 0.0 { 1.0 } else { span };
    padding + ((max - v) / span) * (height - padding * 2.0)
}

/// Vertical scale bound to one series range and canvas height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub height: f64,
    pub padding: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64, height: f64, padding: f64) -> Self {
        Self { min, max, height, padding }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        vertical_scale(v, self.min, self.max, self.height, self.padding)
    }
}
