//! JSON output format for sampler runs

use serde::{Deserialize, Serialize};

use crate::bottleneck::classify;
use crate::bottleneck_history::BottleneckHistogram;
use crate::sample::FrameSample;
use crate::sampler::FrameTimingSampler;

/// Per-channel values of one sample-shaped aggregate (milliseconds, except
/// the rate field).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JsonChannelTimes {
    pub frames_per_second: f32,
    pub full_frame_time: f32,
    pub main_thread_cpu_frame_time: f32,
    pub main_thread_cpu_present_wait_time: f32,
    pub render_thread_cpu_frame_time: f32,
    pub gpu_frame_time: f32,
}

impl From<FrameSample> for JsonChannelTimes {
    fn from(sample: FrameSample) -> Self {
        JsonChannelTimes {
            frames_per_second: sample.frames_per_second,
            full_frame_time: sample.full_frame_time,
            main_thread_cpu_frame_time: sample.main_thread_cpu_frame_time,
            main_thread_cpu_present_wait_time: sample.main_thread_cpu_present_wait_time,
            render_thread_cpu_frame_time: sample.render_thread_cpu_frame_time,
            gpu_frame_time: sample.gpu_frame_time,
        }
    }
}

/// Relative frequency of each bottleneck judgment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JsonHistogram {
    pub present_limited: f32,
    pub cpu: f32,
    pub gpu: f32,
    pub balanced: f32,
}

impl From<BottleneckHistogram> for JsonHistogram {
    fn from(histogram: BottleneckHistogram) -> Self {
        JsonHistogram {
            present_limited: histogram.present_limited,
            cpu: histogram.cpu,
            gpu: histogram.gpu,
            balanced: histogram.balanced,
        }
    }
}

/// One emitted tick of the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTick {
    /// 1-based tick number.
    pub tick: u64,
    /// Classification of the window average at this tick.
    pub bottleneck: String,
    /// Window average at this tick.
    pub average: JsonChannelTimes,
}

/// End-of-run summary statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Total frames ticked through the sampler.
    pub frames: u64,
    pub sample_window: usize,
    pub bottleneck_window: usize,
    pub average: JsonChannelTimes,
    pub min: JsonChannelTimes,
    pub max: JsonChannelTimes,
    pub histogram: JsonHistogram,
    /// Classification of the final window average.
    pub bottleneck: String,
}

/// Root JSON output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier.
    pub version: String,
    /// Format name.
    pub format: String,
    /// Per-tick timeline (empty in summary-only runs).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub timeline: Vec<JsonTick>,
    /// Summary statistics.
    pub summary: JsonSummary,
}

impl JsonReport {
    /// Create an empty report with format tags.
    pub fn new() -> Self {
        JsonReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "fotograma-json-v1".to_string(),
            timeline: Vec::new(),
            summary: JsonSummary::default(),
        }
    }

    /// Append one tick to the timeline.
    pub fn add_tick(&mut self, tick: u64, sampler: &FrameTimingSampler) {
        let average = sampler.average();
        self.timeline.push(JsonTick {
            tick,
            bottleneck: classify(&average).label().to_string(),
            average: average.into(),
        });
    }

    /// Fill the summary from the sampler's final state.
    pub fn set_summary(&mut self, sampler: &FrameTimingSampler, frames: u64) {
        let average = sampler.average();
        self.summary = JsonSummary {
            frames,
            sample_window: sampler.sample_window(),
            bottleneck_window: sampler.bottleneck_window(),
            average: average.into(),
            min: sampler.min().into(),
            max: sampler.max().into(),
            histogram: sampler.histogram().into(),
            bottleneck: classify(&average).label().to_string(),
        };
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}
