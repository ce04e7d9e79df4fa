//! Fixed-width 1D histograms filled from aggregation buckets.

use ns_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on `n_bins` accepted by [`HistogramSpec::validate`].
pub const MAX_BINS: usize = 1_000_000;

/// Under/overflow handling policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPolicy {
    /// Keep out-of-range samples in `underflow/overflow` only.
    #[default]
    Drop,
    /// Fold underflow into the first bin and overflow into the last bin.
    Fold,
}

/// Booking of one histogram: binning plus the bucket it is filled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    /// Histogram name.
    pub name: String,
    /// ROOT-style title (`title;x label;y label`).
    #[serde(default)]
    pub title: String,
    /// Source bucket.
    pub bucket: String,
    /// Number of bins.
    pub n_bins: usize,
    /// Lower edge of the first bin.
    pub x_min: f64,
    /// Upper edge of the last bin.
    pub x_max: f64,
}

impl HistogramSpec {
    /// Create a booking.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        bucket: impl Into<String>,
        n_bins: usize,
        x_min: f64,
        x_max: f64,
    ) -> Self {
        Self { name: name.into(), title: title.into(), bucket: bucket.into(), n_bins, x_min, x_max }
    }

    /// Check binning and names.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("histogram name cannot be empty".into()));
        }
        if self.bucket.trim().is_empty() {
            return Err(Error::Validation(format!("histogram '{}' has an empty bucket", self.name)));
        }
        if self.n_bins == 0 || self.n_bins > MAX_BINS {
            return Err(Error::Validation(format!(
                "histogram '{}' needs 0 < n_bins <= {MAX_BINS}, got {}",
                self.name, self.n_bins
            )));
        }
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_min >= self.x_max {
            return Err(Error::Validation(format!(
                "histogram '{}' has invalid range [{}, {})",
                self.name, self.x_min, self.x_max
            )));
        }
        Ok(())
    }

    /// Uniform bin edges (length = n_bins + 1).
    pub fn bin_edges(&self) -> Vec<f64> {
        let width = (self.x_max - self.x_min) / self.n_bins as f64;
        let mut edges: Vec<f64> =
            (0..self.n_bins).map(|i| self.x_min + width * i as f64).collect();
        edges.push(self.x_max);
        edges
    }

    /// Bin index of an in-range value.
    #[inline]
    fn bin_index(&self, val: f64) -> usize {
        let width = (self.x_max - self.x_min) / self.n_bins as f64;
        // Rounding can push values just below x_max onto n_bins.
        (((val - self.x_min) / width) as usize).min(self.n_bins - 1)
    }

    /// Fill from samples with unit weight.
    pub fn fill(&self, samples: &[f64], flow_policy: FlowPolicy) -> FilledHistogram {
        let bin_edges = self.bin_edges();
        let n_bins = self.n_bins;
        let mut h = FilledHistogram {
            name: self.name.clone(),
            title: self.title.clone(),
            bin_content: vec![0.0; n_bins],
            bin_edges,
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
            nan: 0,
        };

        for &val in samples {
            if val.is_nan() {
                h.nan += 1;
                continue;
            }
            h.entries += 1;

            if val < self.x_min {
                h.underflow += 1.0;
                if flow_policy == FlowPolicy::Fold {
                    h.bin_content[0] += 1.0;
                }
                continue;
            }
            if val >= self.x_max {
                h.overflow += 1.0;
                if flow_policy == FlowPolicy::Fold {
                    h.bin_content[n_bins - 1] += 1.0;
                }
                continue;
            }

            h.bin_content[self.bin_index(val)] += 1.0;
        }

        h
    }
}

/// A filled histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilledHistogram {
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Bin edges.
    pub bin_edges: Vec<f64>,
    /// Bin contents (excluding under/overflow unless folded).
    pub bin_content: Vec<f64>,
    /// Samples below the first edge.
    pub underflow: f64,
    /// Samples at or above the last edge.
    pub overflow: f64,
    /// Number of fills, flows included (ROOT `GetEntries` semantics).
    pub entries: u64,
    /// NaN samples that were not filled. Infinite samples count as flows.
    pub nan: u64,
}

impl FilledHistogram {
    /// Sum of in-range bin contents.
    pub fn integral(&self) -> f64 {
        self.bin_content.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> HistogramSpec {
        HistogramSpec::new("h", "", "x", 3, 0.0, 3.0)
    }

    #[test]
    fn fill_simple() {
        let h = spec().fill(&[0.5, 1.5, 2.5, 0.5, -1.0, 3.5], FlowPolicy::Drop);
        assert_eq!(h.bin_content, vec![2.0, 1.0, 1.0]);
        assert_eq!(h.underflow, 1.0);
        assert_eq!(h.overflow, 1.0);
        assert_eq!(h.entries, 6);
        assert_eq!(h.integral(), 4.0);
    }

    #[test]
    fn fill_flow_fold() {
        let s = HistogramSpec::new("h", "", "x", 2, 0.0, 2.0);
        let h = s.fill(&[-1.0, 0.2, 1.2, 3.0], FlowPolicy::Fold);
        assert_eq!(h.bin_content, vec![2.0, 2.0]);
        assert_eq!(h.underflow, 1.0);
        assert_eq!(h.overflow, 1.0);
        assert_eq!(h.entries, 4);
    }

    #[test]
    fn nan_not_filled() {
        let h = spec().fill(&[f64::NAN, 1.0], FlowPolicy::Fold);
        assert_eq!(h.nan, 1);
        assert_eq!(h.entries, 1);
        assert_eq!(h.integral(), 1.0);
    }

    #[test]
    fn edges_are_uniform() {
        let s = HistogramSpec::new("h_daughter_pdg", "", "daughter_pdg", 50, -25.0, 25.0);
        let edges = s.bin_edges();
        assert_eq!(edges.len(), 51);
        assert_eq!(edges[0], -25.0);
        assert_eq!(edges[25], 0.0);
        assert_eq!(edges[50], 25.0);

        // b and anti-b land in separate unit-wide bins.
        let h = s.fill(&[5.0, -5.0], FlowPolicy::Drop);
        assert_eq!(h.bin_content[30], 1.0);
        assert_eq!(h.bin_content[20], 1.0);
    }

    #[test]
    fn bin_index_boundaries() {
        let s = HistogramSpec::new("h_higgs_mass", "", "higgs_mass", 50, 110.0, 140.0);
        assert_eq!(s.bin_index(110.0), 0);
        assert_eq!(s.bin_index(125.1), 25);
        assert_eq!(s.bin_index(139.999_999_999), 49);

        // Infinities are flows, not NaN.
        let h = s.fill(&[f64::NEG_INFINITY, f64::INFINITY, 140.0], FlowPolicy::Drop);
        assert_eq!(h.nan, 0);
        assert_eq!(h.entries, 3);
        assert_eq!(h.underflow, 1.0);
        assert_eq!(h.overflow, 2.0);
        assert_eq!(h.integral(), 0.0);
    }

    #[test]
    fn validate_rejects_bad_bookings() {
        assert!(spec().validate().is_ok());
        assert!(HistogramSpec::new("h", "", "x", 0, 0.0, 1.0).validate().is_err());
        assert!(HistogramSpec::new("h", "", "x", 1, 1.0, 1.0).validate().is_err());
        assert!(HistogramSpec::new("h", "", "x", 1, 0.0, f64::INFINITY).validate().is_err());
        assert!(HistogramSpec::new("h", "", " ", 1, 0.0, 1.0).validate().is_err());
        assert!(HistogramSpec::new("", "", "x", 1, 0.0, 1.0).validate().is_err());
    }

    #[test]
    fn validate_caps_bin_count() {
        assert!(HistogramSpec::new("h", "", "x", MAX_BINS, 0.0, 1.0).validate().is_ok());
        let err = HistogramSpec::new("h_pt", "", "higgs_pt", usize::MAX, 0.0, 100.0).validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("n_bins"));
    }
}
