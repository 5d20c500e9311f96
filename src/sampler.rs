//! Frame timing sampler: the per-tick orchestrator
//!
//! Owns both sliding windows and drives the fixed per-tick pipeline:
//! evict, ingest, aggregate, classify, histogram. Single-threaded by
//! design; callers invoke [`FrameTimingSampler::tick`] once per frame and
//! read the derived state between ticks.

use tracing::debug;

use crate::bottleneck_history::{BottleneckHistogram, BottleneckHistory};
use crate::sample::{FrameSample, SampleField};
use crate::sample_history::SampleHistory;

/// Default sliding window for frame-time aggregation, in frames.
pub const DEFAULT_SAMPLE_WINDOW: usize = 30;

/// Default sliding window for the bottleneck histogram, in classifications.
pub const DEFAULT_BOTTLENECK_WINDOW: usize = 60;

/// Rolling frame-time aggregator and bottleneck classifier.
///
/// Both windows are owned exclusively by the sampler; no external mutation
/// path exists. Window sizes may change between ticks and take effect on the
/// next [`FrameTimingSampler::tick`] without re-bucketing stored history.
#[derive(Debug, Clone)]
pub struct FrameTimingSampler {
    sample_history: SampleHistory,
    bottleneck_history: BottleneckHistory,
    sample_window: usize,
    bottleneck_window: usize,
    last_sample: FrameSample,
}

impl FrameTimingSampler {
    /// Create a sampler with the default windows (30 samples, 60 labels).
    pub fn new() -> Self {
        Self::with_windows(DEFAULT_SAMPLE_WINDOW, DEFAULT_BOTTLENECK_WINDOW)
    }

    /// Create a sampler with explicit window sizes.
    ///
    /// Sizes are not validated here; a zero window is caught by the eviction
    /// assert on the first tick.
    pub fn with_windows(sample_window: usize, bottleneck_window: usize) -> Self {
        FrameTimingSampler {
            sample_history: SampleHistory::with_capacity(sample_window),
            bottleneck_history: BottleneckHistory::with_capacity(bottleneck_window),
            sample_window,
            bottleneck_window,
            last_sample: FrameSample::default(),
        }
    }

    /// Ingest one raw frame sample and refresh all derived state.
    ///
    /// Pipeline order is fixed: evict sample history, append, recompute
    /// aggregates, evict bottleneck history, classify the fresh average,
    /// recompute the histogram. Eviction before insertion keeps each window
    /// at its configured size immediately after the tick.
    pub fn tick(&mut self, sample: FrameSample) {
        self.last_sample = sample;

        self.sample_history.discard_old_samples(self.sample_window);
        self.sample_history.add(sample);
        self.sample_history.compute_aggregate_values();

        self.bottleneck_history
            .discard_old_samples(self.bottleneck_window);
        self.bottleneck_history
            .record_averaged_sample(&self.sample_history.average());
        self.bottleneck_history.compute_histogram();
    }

    /// Drop all history and derived state.
    pub fn reset(&mut self) {
        debug!("resetting sampler state");
        self.sample_history.clear();
        self.bottleneck_history.clear();
        self.last_sample = FrameSample::default();
    }

    /// Per-channel average over the sample window.
    pub fn average(&self) -> FrameSample {
        self.sample_history.average()
    }

    /// Per-channel minimum over the sample window.
    pub fn min(&self) -> FrameSample {
        self.sample_history.min()
    }

    /// Per-channel maximum over the sample window.
    pub fn max(&self) -> FrameSample {
        self.sample_history.max()
    }

    /// Rolling bottleneck histogram.
    pub fn histogram(&self) -> BottleneckHistogram {
        self.bottleneck_history.histogram()
    }

    /// The raw sample from the most recent tick.
    pub fn last_sample(&self) -> FrameSample {
        self.last_sample
    }

    /// Current sample window size.
    pub fn sample_window(&self) -> usize {
        self.sample_window
    }

    /// Current bottleneck window size.
    pub fn bottleneck_window(&self) -> usize {
        self.bottleneck_window
    }

    /// Number of samples currently stored.
    pub fn sampled_frames(&self) -> usize {
        self.sample_history.len()
    }

    /// Number of classification labels currently stored.
    pub fn classified_frames(&self) -> usize {
        self.bottleneck_history.len()
    }

    /// Change the sample window; applies on the next tick.
    pub fn set_sample_window(&mut self, window: usize) {
        debug!(window, "sample window changed");
        self.sample_window = window;
    }

    /// Change the bottleneck window; applies on the next tick.
    pub fn set_bottleneck_window(&mut self, window: usize) {
        debug!(window, "bottleneck window changed");
        self.bottleneck_window = window;
    }

    /// Print a frame-timing summary table to stderr.
    pub fn print_summary(&self) {
        if self.sample_history.is_empty() {
            eprintln!("No frames sampled.");
            return;
        }

        let average = self.average();
        let min = self.min();
        let max = self.max();

        eprintln!(
            "\n=== Frame Timing Summary ({} frames in window) ===",
            self.sample_history.len()
        );
        eprintln!(
            "{:<34} {:>9} {:>9} {:>9}",
            "channel", "min", "avg", "max"
        );
        eprintln!("---------------------------------- --------- --------- ---------");
        for field in SampleField::ALL {
            eprintln!(
                "{:<34} {:>9.2} {:>9.2} {:>9.2}",
                field.label(),
                min.field(field),
                average.field(field),
                max.field(field)
            );
        }

        let histogram = self.histogram();
        eprintln!(
            "\nBottleneck distribution ({} classifications):",
            self.bottleneck_history.len()
        );
        eprintln!("  GPU bound:       {:>5.1}%", histogram.gpu * 100.0);
        eprintln!("  CPU bound:       {:>5.1}%", histogram.cpu * 100.0);
        eprintln!(
            "  Present limited: {:>5.1}%",
            histogram.present_limited * 100.0
        );
        eprintln!("  Balanced:        {:>5.1}%", histogram.balanced * 100.0);

        let indeterminate = 1.0 - histogram.sum();
        if indeterminate > 0.0005 {
            eprintln!(
                "  Indeterminate:   {:>5.1}% (missing timing channels)",
                indeterminate * 100.0
            );
        }
    }
}

impl Default for FrameTimingSampler {
    fn default() -> Self {
        Self::new()
    }
}
