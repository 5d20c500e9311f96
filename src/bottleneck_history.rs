//! Sliding window of bottleneck classifications with a rolling histogram
//!
//! Keeps a bounded FIFO of recent [`Bottleneck`] labels and distills them
//! into a four-bucket relative-frequency histogram. Window and eviction
//! semantics mirror [`crate::sample_history::SampleHistory`], with an
//! independent capacity.

use std::collections::VecDeque;

use crate::bottleneck::{classify, Bottleneck};
use crate::sample::FrameSample;

/// Relative frequency of each bottleneck judgment over the stored window.
///
/// Each bucket divides by the TOTAL stored label count, including
/// `Indeterminate` entries that land in no bucket. The buckets therefore sum
/// to exactly 1.0 only when the window holds no indeterminate frames, and to
/// less than 1.0 otherwise. Downstream consumers rely on that divisor, so it
/// is kept as-is rather than normalized over the determinate count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BottleneckHistogram {
    pub present_limited: f32,
    pub cpu: f32,
    pub gpu: f32,
    pub balanced: f32,
}

impl BottleneckHistogram {
    /// Sum of the four buckets; the indeterminate share of the window is
    /// `1.0 - sum()` when the window is non-empty.
    pub fn sum(&self) -> f32 {
        self.present_limited + self.cpu + self.gpu + self.balanced
    }
}

/// Bounded FIFO of classification labels plus the derived histogram.
///
/// Same split contract as the sample history: recording never checks
/// capacity, eviction runs first each tick. The histogram is valid only
/// after an explicit [`BottleneckHistory::compute_histogram`] call.
#[derive(Debug, Clone, Default)]
pub struct BottleneckHistory {
    bottlenecks: VecDeque<Bottleneck>,
    histogram: BottleneckHistogram,
}

impl BottleneckHistory {
    /// Create an empty history with a storage hint for `capacity` labels.
    pub fn with_capacity(capacity: usize) -> Self {
        BottleneckHistory {
            bottlenecks: VecDeque::with_capacity(capacity),
            histogram: BottleneckHistogram::default(),
        }
    }

    /// Classify an averaged sample and append the label.
    pub fn record_averaged_sample(&mut self, average: &FrameSample) {
        self.bottlenecks.push_back(classify(average));
    }

    /// Evict oldest labels until fewer than `capacity` remain, then reserve
    /// storage for `capacity` labels.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, as for the sample history.
    pub fn discard_old_samples(&mut self, capacity: usize) {
        assert!(capacity > 0, "bottleneck history capacity must be positive");

        while self.bottlenecks.len() >= capacity {
            self.bottlenecks.pop_front();
        }
        self.bottlenecks.reserve(capacity - self.bottlenecks.len());
    }

    /// Recompute the histogram over the stored labels.
    ///
    /// An empty history yields an all-zero histogram rather than dividing
    /// by zero.
    pub fn compute_histogram(&mut self) {
        if self.bottlenecks.is_empty() {
            self.histogram = BottleneckHistogram::default();
            return;
        }

        let mut present_limited = 0usize;
        let mut cpu = 0usize;
        let mut gpu = 0usize;
        let mut balanced = 0usize;

        for bottleneck in &self.bottlenecks {
            match bottleneck {
                Bottleneck::PresentLimited => present_limited += 1,
                Bottleneck::Cpu => cpu += 1,
                Bottleneck::Gpu => gpu += 1,
                Bottleneck::Balanced => balanced += 1,
                // Counts toward the divisor, lands in no bucket.
                Bottleneck::Indeterminate => {}
            }
        }

        let total = self.bottlenecks.len() as f32;
        self.histogram = BottleneckHistogram {
            present_limited: present_limited as f32 / total,
            cpu: cpu as f32 / total,
            gpu: gpu as f32 / total,
            balanced: balanced as f32 / total,
        };
    }

    /// Empty the history and zero the histogram.
    pub fn clear(&mut self) {
        self.bottlenecks.clear();
        self.histogram = BottleneckHistogram::default();
    }

    /// The histogram as of the last recompute.
    pub fn histogram(&self) -> BottleneckHistogram {
        self.histogram
    }

    /// Number of stored labels.
    pub fn len(&self) -> usize {
        self.bottlenecks.len()
    }

    /// Whether the history holds no labels.
    pub fn is_empty(&self) -> bool {
        self.bottlenecks.is_empty()
    }

    /// Oldest stored label, if any.
    pub fn oldest(&self) -> Option<Bottleneck> {
        self.bottlenecks.front().copied()
    }
}
