//! Frame bottleneck classification
//!
//! Maps one *averaged* frame sample to the resource most plausibly limiting
//! frame throughput. The heuristic is an ordered rule table: each rule is a
//! named predicate over the sample and a near-full-frame margin, evaluated
//! top-down with first match winning. The rules overlap by construction
//! (a frame can be both GPU-heavy and present-waiting), so evaluation order
//! is part of the contract and must not be reordered.

use std::fmt;

use crate::sample::FrameSample;

/// Fraction of the full frame time a channel must stay under to count as
/// "not near-full". A channel above `(1 - 0.20) * full_frame_time` is
/// treated as consuming essentially the whole frame.
pub const NEAR_FULL_FRAME_THRESHOLD: f32 = 0.20;

/// Present-wait time above which the main thread is considered to be
/// meaningfully blocked on presentation (vsync or frame cap), in ms.
pub const PRESENT_WAIT_THRESHOLD_MS: f32 = 0.5;

/// The resource limiting frame throughput over the sampled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bottleneck {
    /// Required timing channels were missing; no judgment possible.
    Indeterminate,
    /// The frame is paced by presentation (vsync or frame-rate cap).
    PresentLimited,
    /// A CPU thread consumes nearly the whole frame.
    Cpu,
    /// The GPU consumes nearly the whole frame.
    Gpu,
    /// No single resource dominates.
    Balanced,
}

impl Bottleneck {
    /// Stable lowercase token used in streams, CSV rows and JSON reports.
    pub fn label(self) -> &'static str {
        match self {
            Bottleneck::Indeterminate => "indeterminate",
            Bottleneck::PresentLimited => "present-limited",
            Bottleneck::Cpu => "cpu",
            Bottleneck::Gpu => "gpu",
            Bottleneck::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classification rule: predicate over (averaged sample, near-full margin).
struct Rule {
    applies: fn(&FrameSample, f32) -> bool,
    label: Bottleneck,
}

/// Ordered rule table. First match wins; no rule matching means `Balanced`.
const RULES: &[Rule] = &[
    Rule {
        applies: lacks_required_channels,
        label: Bottleneck::Indeterminate,
    },
    Rule {
        applies: gpu_near_full,
        label: Bottleneck::Gpu,
    },
    Rule {
        applies: cpu_near_full,
        label: Bottleneck::Cpu,
    },
    Rule {
        applies: waiting_on_present,
        label: Bottleneck::PresentLimited,
    },
];

/// Classification needs at least the GPU and main-thread channels populated.
fn lacks_required_channels(sample: &FrameSample, _margin: f32) -> bool {
    sample.gpu_frame_time == 0.0 || sample.main_thread_cpu_frame_time == 0.0
}

/// GPU consumes nearly the whole frame while both CPU channels do not.
fn gpu_near_full(sample: &FrameSample, margin: f32) -> bool {
    sample.gpu_frame_time > margin
        && sample.main_thread_cpu_frame_time < margin
        && sample.render_thread_cpu_frame_time < margin
}

/// Either CPU channel consumes nearly the whole frame while the GPU does not.
fn cpu_near_full(sample: &FrameSample, margin: f32) -> bool {
    sample.gpu_frame_time < margin
        && (sample.main_thread_cpu_frame_time > margin
            || sample.render_thread_cpu_frame_time > margin)
}

/// Non-trivial present wait while no channel is near-saturated: the classic
/// vsync / frame-rate-cap signature.
fn waiting_on_present(sample: &FrameSample, margin: f32) -> bool {
    sample.main_thread_cpu_present_wait_time > PRESENT_WAIT_THRESHOLD_MS
        && sample.gpu_frame_time < margin
        && sample.main_thread_cpu_frame_time < margin
        && sample.render_thread_cpu_frame_time < margin
}

/// Classify one averaged frame sample.
///
/// Only averaged samples are meaningful here; classifying raw or min/max
/// samples amplifies single-frame noise into label churn.
pub fn classify(sample: &FrameSample) -> Bottleneck {
    let margin = (1.0 - NEAR_FULL_FRAME_THRESHOLD) * sample.full_frame_time;

    RULES
        .iter()
        .find(|rule| (rule.applies)(sample, margin))
        .map_or(Bottleneck::Balanced, |rule| rule.label)
}
