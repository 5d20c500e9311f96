//! CLI argument parsing for Fotograma

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::synthetic::WorkloadProfile;

/// Output format for sampler runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "fotograma")]
#[command(version)]
#[command(about = "Frame-time sampler with GPU/CPU bottleneck classification", long_about = None)]
pub struct Cli {
    /// Frame-timing log to replay (JSON Lines, one frame per line); "-" reads stdin
    #[arg(value_name = "TRACE")]
    pub trace: Option<PathBuf>,

    /// Print only the end-of-run summary instead of the per-frame stream
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Sliding window for frame-time aggregation [default: 30]
    #[arg(short = 'w', long = "sample-window", value_name = "FRAMES")]
    pub sample_window: Option<usize>,

    /// Sliding window for the bottleneck histogram [default: 60]
    #[arg(short = 'b', long = "bottleneck-window", value_name = "FRAMES")]
    pub bottleneck_window: Option<usize>,

    /// Generate a synthetic workload instead of replaying a trace
    #[arg(long = "synthetic", value_enum, value_name = "PROFILE")]
    pub synthetic: Option<WorkloadProfile>,

    /// Number of frames to generate with --synthetic
    #[arg(long = "frames", value_name = "N", default_value = "300")]
    pub frames: u64,

    /// RNG seed for --synthetic
    #[arg(long = "seed", value_name = "SEED", default_value = "42")]
    pub seed: u64,

    /// Target frame rate for --synthetic workloads
    #[arg(long = "target-fps", value_name = "FPS", default_value = "60")]
    pub target_fps: f32,

    /// Emit only every Nth frame in streaming mode [default: 1]
    #[arg(long = "every", value_name = "N")]
    pub every: Option<u64>,

    /// TOML configuration file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
