//! Session orchestration: merge settings, pick an input source, drive the
//! sampler, and emit output in the configured format.

use anyhow::Result;
use tracing::debug;

use crate::bottleneck::classify;
use crate::cli::{Cli, OutputFormat};
use crate::config::ConfigFile;
use crate::csv_output::{CsvSummaryOutput, CsvTimeline};
use crate::frame_log;
use crate::json_output::JsonReport;
use crate::sample::FrameSample;
use crate::sampler::{FrameTimingSampler, DEFAULT_BOTTLENECK_WINDOW, DEFAULT_SAMPLE_WINDOW};
use crate::synthetic::WorkloadGenerator;

/// Resolved session settings.
///
/// Built by [`SessionConfig::merge`]: CLI flags win over config-file values,
/// which win over built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub sample_window: usize,
    pub bottleneck_window: usize,
    pub format: OutputFormat,
    pub every: u64,
    pub summary_only: bool,
}

impl SessionConfig {
    /// Merge CLI flags over config-file values over built-in defaults, then
    /// validate the result.
    pub fn merge(cli: &Cli, file: &ConfigFile) -> Result<Self> {
        let sample_window = cli
            .sample_window
            .or(file.sampler.sample_window)
            .unwrap_or(DEFAULT_SAMPLE_WINDOW);
        let bottleneck_window = cli
            .bottleneck_window
            .or(file.sampler.bottleneck_window)
            .unwrap_or(DEFAULT_BOTTLENECK_WINDOW);
        let format = cli
            .format
            .or(file.output.format)
            .unwrap_or(OutputFormat::Text);
        let every = cli.every.or(file.output.every).unwrap_or(1);

        if sample_window == 0 {
            anyhow::bail!(
                "Invalid value for --sample-window: {} (must be >= 1)",
                sample_window
            );
        }
        if bottleneck_window == 0 {
            anyhow::bail!(
                "Invalid value for --bottleneck-window: {} (must be >= 1)",
                bottleneck_window
            );
        }
        if every == 0 {
            anyhow::bail!("Invalid value for --every: {} (must be >= 1)", every);
        }

        Ok(SessionConfig {
            sample_window,
            bottleneck_window,
            format,
            every,
            summary_only: cli.summary,
        })
    }
}

/// Run a sampling session from either a frame log or a synthetic workload
/// (mutually exclusive).
pub fn run_session(cli: &Cli, config: SessionConfig) -> Result<()> {
    match (&cli.trace, cli.synthetic) {
        (Some(path), None) => {
            let samples = if path.as_os_str() == "-" {
                frame_log::read_lines(std::io::stdin().lock())?
            } else {
                frame_log::read_path(path)?
            };
            run_frames(samples, &config)
        }
        (None, Some(profile)) => {
            let generator = WorkloadGenerator::new(profile, cli.seed, cli.target_fps);
            let samples: Vec<FrameSample> = generator.take(cli.frames as usize).collect();
            run_frames(samples, &config)
        }
        (Some(_), Some(_)) => {
            anyhow::bail!("Cannot specify both TRACE and --synthetic. Choose one.");
        }
        (None, None) => {
            anyhow::bail!(
                "Must specify either TRACE or --synthetic. Usage: fotograma TRACE or fotograma --synthetic PROFILE"
            );
        }
    }
}

/// Tick every sample through the sampler, streaming per-frame output along
/// the way, then emit the end-of-run summary.
fn run_frames(samples: Vec<FrameSample>, config: &SessionConfig) -> Result<()> {
    debug!(
        frames = samples.len(),
        sample_window = config.sample_window,
        bottleneck_window = config.bottleneck_window,
        "starting session"
    );

    let mut sampler =
        FrameTimingSampler::with_windows(config.sample_window, config.bottleneck_window);
    let mut json_report = JsonReport::new();
    let mut csv_timeline = CsvTimeline::new();
    let mut frames: u64 = 0;

    for sample in samples {
        sampler.tick(sample);
        frames += 1;

        if config.summary_only || frames % config.every != 0 {
            continue;
        }
        match config.format {
            OutputFormat::Text => print_stream_line(frames, &sampler),
            OutputFormat::Json => json_report.add_tick(frames, &sampler),
            OutputFormat::Csv => {
                let average = sampler.average();
                csv_timeline.add_tick(frames, average, classify(&average));
            }
        }
    }

    match config.format {
        OutputFormat::Text => sampler.print_summary(),
        OutputFormat::Json => {
            json_report.set_summary(&sampler, frames);
            println!("{}", json_report.to_json()?);
        }
        OutputFormat::Csv => {
            if config.summary_only {
                let mut summary = CsvSummaryOutput::new();
                summary.add_aggregates(sampler.min(), sampler.average(), sampler.max());
                summary.set_histogram(sampler.histogram());
                print!("{}", summary.to_csv());
            } else {
                print!("{}", csv_timeline.to_csv());
            }
        }
    }

    debug!(frames, "session complete");
    Ok(())
}

/// One streaming text line: the window average and its classification.
fn print_stream_line(tick: u64, sampler: &FrameTimingSampler) {
    let average = sampler.average();
    println!(
        "frame {:>6}  fps {:>7.2}  full {:>7.2} ms  cpu {:>7.2} ms  gpu {:>7.2} ms  [{}]",
        tick,
        average.frames_per_second,
        average.full_frame_time,
        average.main_thread_cpu_frame_time,
        average.gpu_frame_time,
        classify(&average)
    );
}
