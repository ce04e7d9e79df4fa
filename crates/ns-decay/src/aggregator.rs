//! Named sample buckets.
//!
//! An [`Aggregator`] is the histogram-agnostic sink of the traversal: each
//! bucket is an unordered list of `f64` samples that lives for a whole
//! analysis run. Binning happens later, in [`crate::histogram`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named buckets of scalar samples.
///
/// `record` needs `&mut self`, so one aggregator has exactly one writer at a
/// time. Parallel hosts keep one per worker and combine them with [`Aggregator::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aggregator {
    buckets: BTreeMap<String, Vec<f64>>,
}

impl Aggregator {
    /// Empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `bucket` empty if it does not exist yet.
    pub fn declare(&mut self, bucket: &str) {
        if !self.buckets.contains_key(bucket) {
            self.buckets.insert(bucket.to_string(), Vec::new());
        }
    }

    /// Append `value` to `bucket`, creating the bucket on first use.
    pub fn record(&mut self, bucket: &str, value: f64) {
        match self.buckets.get_mut(bucket) {
            Some(samples) => samples.push(value),
            None => {
                self.buckets.insert(bucket.to_string(), vec![value]);
            }
        }
    }

    /// Current samples of `bucket`; empty if the bucket is unknown.
    pub fn drain(&self, bucket: &str) -> &[f64] {
        self.buckets.get(bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `bucket` exists (possibly empty).
    pub fn contains(&self, bucket: &str) -> bool {
        self.buckets.contains_key(bucket)
    }

    /// Bucket names in sorted order.
    pub fn bucket_names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Total number of samples across buckets.
    pub fn total_samples(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Drop all samples, keeping the bucket names.
    pub fn reset(&mut self) {
        for samples in self.buckets.values_mut() {
            samples.clear();
        }
    }

    /// Move every sample of `other` into `self`.
    pub fn merge(&mut self, other: Aggregator) {
        for (name, mut samples) in other.buckets {
            self.buckets.entry(name).or_default().append(&mut samples);
        }
    }
}
