//! Synthetic frame-timing workloads
//!
//! Deterministic, seeded generators that produce plausible per-frame timing
//! tuples around a target frame budget. Used by the CLI as a built-in load
//! source, and by benches and integration tests as a reproducible input.

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sample::FrameSample;

/// Frames per phase when cycling profiles in [`WorkloadProfile::Mixed`].
const MIXED_PHASE_FRAMES: u64 = 120;

/// Shape of the generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkloadProfile {
    /// GPU consumes nearly the whole frame.
    GpuBound,
    /// Main-thread CPU consumes nearly the whole frame.
    CpuBound,
    /// All channels cheap, main thread blocked on presentation.
    PresentLimited,
    /// Every channel runs near the frame budget.
    Balanced,
    /// Cycles through the four profiles above in fixed-length phases.
    Mixed,
    /// GPU and render-thread channels permanently unmeasured.
    Headless,
}

/// Seeded generator of synthetic frame samples.
///
/// Identical (profile, seed, target rate) inputs yield identical sample
/// streams. The iterator is infinite; callers bound it with `take`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    profile: WorkloadProfile,
    rng: StdRng,
    frame_budget_ms: f32,
    frame_index: u64,
}

impl WorkloadGenerator {
    /// Create a generator targeting `target_fps` frames per second.
    ///
    /// `target_fps` must be positive; the CLI validates this before
    /// construction.
    pub fn new(profile: WorkloadProfile, seed: u64, target_fps: f32) -> Self {
        WorkloadGenerator {
            profile,
            rng: StdRng::seed_from_u64(seed),
            frame_budget_ms: 1000.0 / target_fps,
            frame_index: 0,
        }
    }

    /// Frame budget implied by the target rate, in milliseconds.
    pub fn frame_budget_ms(&self) -> f32 {
        self.frame_budget_ms
    }

    /// Generate the next frame sample.
    pub fn next_sample(&mut self) -> FrameSample {
        let profile = match self.profile {
            WorkloadProfile::Mixed => match (self.frame_index / MIXED_PHASE_FRAMES) % 4 {
                0 => WorkloadProfile::GpuBound,
                1 => WorkloadProfile::CpuBound,
                2 => WorkloadProfile::PresentLimited,
                _ => WorkloadProfile::Balanced,
            },
            other => other,
        };
        self.frame_index += 1;

        match profile {
            WorkloadProfile::GpuBound => self.gpu_bound_sample(),
            WorkloadProfile::CpuBound => self.cpu_bound_sample(),
            WorkloadProfile::PresentLimited => self.present_limited_sample(),
            WorkloadProfile::Balanced => self.balanced_sample(),
            WorkloadProfile::Headless => self.headless_sample(),
            WorkloadProfile::Mixed => unreachable!("mixed resolves to a concrete profile"),
        }
    }

    fn gpu_bound_sample(&mut self) -> FrameSample {
        let budget = self.frame_budget_ms;
        let gpu = self.jitter(0.95 * budget, 0.03 * budget);
        let main = self.jitter(0.25 * budget, 0.05 * budget);
        let render = self.jitter(0.15 * budget, 0.03 * budget);
        let wait = self.jitter(0.1, 0.05);
        let full = gpu + self.jitter(0.04 * budget, 0.02 * budget);
        FrameSample::from_frame_times(full, main, wait, render, gpu)
    }

    fn cpu_bound_sample(&mut self) -> FrameSample {
        let budget = self.frame_budget_ms;
        let main = self.jitter(0.95 * budget, 0.03 * budget);
        let render = self.jitter(0.35 * budget, 0.05 * budget);
        let gpu = self.jitter(0.3 * budget, 0.05 * budget);
        let wait = self.jitter(0.1, 0.05);
        let full = main + self.jitter(0.04 * budget, 0.02 * budget);
        FrameSample::from_frame_times(full, main, wait, render, gpu)
    }

    fn present_limited_sample(&mut self) -> FrameSample {
        let budget = self.frame_budget_ms;
        let full = self.jitter(budget, 0.02 * budget);
        let main = self.jitter(0.3 * budget, 0.05 * budget);
        let render = self.jitter(0.2 * budget, 0.04 * budget);
        let gpu = self.jitter(0.35 * budget, 0.05 * budget);
        // The slack between work and budget shows up as present wait.
        let wait = self.jitter(0.2 * budget, 0.04 * budget);
        FrameSample::from_frame_times(full, main, wait, render, gpu)
    }

    fn balanced_sample(&mut self) -> FrameSample {
        let budget = self.frame_budget_ms;
        let full = self.jitter(budget, 0.03 * budget);
        let main = self.jitter(0.9 * budget, 0.04 * budget);
        let render = self.jitter(0.88 * budget, 0.04 * budget);
        let gpu = self.jitter(0.9 * budget, 0.04 * budget);
        let wait = self.jitter(0.1, 0.05);
        FrameSample::from_frame_times(full, main, wait, render, gpu)
    }

    fn headless_sample(&mut self) -> FrameSample {
        let budget = self.frame_budget_ms;
        let full = self.jitter(budget, 0.05 * budget);
        let main = self.jitter(0.5 * budget, 0.1 * budget);
        // No GPU query and no render thread: those channels stay unmeasured.
        FrameSample::from_frame_times(full, main, 0.0, 0.0, 0.0)
    }

    fn jitter(&mut self, around: f32, spread: f32) -> f32 {
        if spread <= 0.0 {
            return around.max(0.01);
        }
        (around + self.rng.gen_range(-spread..spread)).max(0.01)
    }
}

impl Iterator for WorkloadGenerator {
    type Item = FrameSample;

    fn next(&mut self) -> Option<FrameSample> {
        Some(self.next_sample())
    }
}
