// File: crates/terminal-chart/src/series.rs
// Summary: Series model: an ordered run of samples plotted against their index.

/// Ordered samples; the x coordinate of a sample is its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn samples(&self) -> &[f64] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Smallest and largest sample, or `None` for an empty series.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.samples)
    }
}

impl From<Vec<f64>> for Series {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl From<&[f64]> for Series {
    fn from(samples: &[f64]) -> Self {
        Self { samples: samples.to_vec() }
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] { &self.samples }
}

pub fn min_max(samples: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = samples.split_first()?;
    let mut lo = first;
    let mut hi = first;
    for &v in rest {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_of_empty_is_none() {
        assert_eq!(Series::new().min_max(), None);
    }

    #[test]
    fn min_max_tracks_extremes() {
        let s = Series::from(vec![3.0, -1.5, 8.25, 0.0]);
        assert_eq!(s.min_max(), Some((-1.5, 8.25)));
    }
}
