//! Sliding window of frame samples with min/average/max aggregation
//!
//! Keeps a bounded FIFO of recent [`FrameSample`]s and recomputes per-channel
//! aggregates on demand using Trueno SIMD-accelerated statistics. Channels
//! honor the zero-as-missing convention: a `0.0` value contributes to no
//! minimum or average, only to the plain maximum.

use std::collections::VecDeque;

use trueno::Vector;

use crate::sample::{FrameSample, SampleField};

/// Bounded FIFO of frame samples plus derived per-channel aggregates.
///
/// Capacity enforcement is split by contract: [`SampleHistory::add`] never
/// checks capacity; callers run [`SampleHistory::discard_old_samples`] first
/// each tick. The aggregates are valid only after an explicit
/// [`SampleHistory::compute_aggregate_values`] call.
#[derive(Debug, Clone, Default)]
pub struct SampleHistory {
    samples: VecDeque<FrameSample>,
    average: FrameSample,
    min: FrameSample,
    max: FrameSample,
}

impl SampleHistory {
    /// Create an empty history with a storage hint for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        SampleHistory {
            samples: VecDeque::with_capacity(capacity),
            average: FrameSample::default(),
            min: FrameSample::default(),
            max: FrameSample::default(),
        }
    }

    /// Append a sample without enforcing capacity.
    pub fn add(&mut self, sample: FrameSample) {
        self.samples.push_back(sample);
    }

    /// Evict oldest samples until fewer than `capacity` remain, then reserve
    /// storage for `capacity` samples.
    ///
    /// Called before `add` each tick, this keeps the stored count at most
    /// `capacity` after insertion. The reserve is a performance hint, not a
    /// hard cap.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A zero capacity is a programming defect
    /// in the caller, not a recoverable input condition.
    pub fn discard_old_samples(&mut self, capacity: usize) {
        assert!(capacity > 0, "sample history capacity must be positive");

        while self.samples.len() >= capacity {
            self.samples.pop_front();
        }
        self.samples.reserve(capacity - self.samples.len());
    }

    /// Recompute the three per-channel aggregates over the stored samples.
    ///
    /// Each of the six channels folds independently:
    /// - `min`: minimum over values `> 0.0`; `0.0` when no sample measured
    ///   the channel,
    /// - `max`: plain maximum over all values including zeros,
    /// - `average`: mean over values `> 0.0`; `0.0` when no sample measured
    ///   the channel (the divisor is the per-channel measured count, never
    ///   the total sample count).
    ///
    /// An empty history yields all-zero aggregates.
    pub fn compute_aggregate_values(&mut self) {
        let mut average = FrameSample::default();
        let mut min = FrameSample::default();
        let mut max = FrameSample::default();

        for field in SampleField::ALL {
            let all: Vec<f32> = self.samples.iter().map(|s| s.field(field)).collect();
            let measured: Vec<f32> = all.iter().copied().filter(|&v| v > 0.0).collect();

            if !all.is_empty() {
                max.set_field(field, Vector::from_slice(&all).max().unwrap_or(0.0));
            }
            if !measured.is_empty() {
                let v = Vector::from_slice(&measured);
                min.set_field(field, v.min().unwrap_or(0.0));
                average.set_field(field, v.mean().unwrap_or(0.0));
            }
        }

        self.average = average;
        self.min = min;
        self.max = max;
    }

    /// Empty the history and zero all aggregates.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.average = FrameSample::default();
        self.min = FrameSample::default();
        self.max = FrameSample::default();
    }

    /// Per-channel average over the window, as of the last recompute.
    pub fn average(&self) -> FrameSample {
        self.average
    }

    /// Per-channel minimum over the window, as of the last recompute.
    pub fn min(&self) -> FrameSample {
        self.min
    }

    /// Per-channel maximum over the window, as of the last recompute.
    pub fn max(&self) -> FrameSample {
        self.max
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the history holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest stored sample, if any.
    pub fn oldest(&self) -> Option<&FrameSample> {
        self.samples.front()
    }
}
