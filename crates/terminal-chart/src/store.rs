// File: crates/terminal-chart/src/store.rs
// Summary: SeriesStore, the single mutable cell holding the series on display.

use crate::series::Series;

/// Holds the series currently on display. Each `replace` discards the previous
/// series entirely; nothing is merged or kept.
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    current: Series,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in `series` wholesale. Any finite sequence is accepted, including an empty one.
    pub fn replace(&mut self, series: impl Into<Series>) {
        self.current = series.into();
        log::trace!("series store replaced ({} samples)", self.current.len());
    }

    /// The samples held since the last `replace`.
    pub fn current(&self) -> &[f64] {
        self.current.samples()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_then_read_preserves_order() {
        let mut store = SeriesStore::new();
        store.replace(vec![1.0, 2.0, 3.0]);
        assert_eq!(store.current(), &[1.0, 2.0, 3.0]);
        // reads are idempotent
        assert_eq!(store.current(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn replace_discards_previous_series() {
        let mut store = SeriesStore::new();
        store.replace(vec![9.0, 8.0, 7.0, 6.0]);
        store.replace(vec![1.0]);
        assert_eq!(store.current(), &[1.0]);
        store.replace(Vec::<f64>::new());
        assert!(store.current().is_empty());
    }
}
