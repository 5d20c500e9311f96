//! Frame-timing log input (JSON Lines)
//!
//! Replays recorded per-frame timing data through the sampler: one JSON
//! object per line, field names matching [`FrameSample`], blank lines and
//! `#` comment lines skipped. The rate field is optional and derived from
//! the full frame time when absent, so collectors only need the five
//! measured channels.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::sample::FrameSample;

/// Errors reading or parsing a frame-timing log.
#[derive(Debug, Error)]
pub enum FrameLogError {
    #[error("frame log not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read frame log")]
    Io(#[from] std::io::Error),

    #[error("invalid frame record at line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FrameLogError>;

/// One recorded frame, as serialized in the log.
///
/// Every channel defaults to `0.0` (the missing-data value), so a record may
/// carry only the channels its collector measured.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FrameRecord {
    pub frames_per_second: f32,
    pub full_frame_time: f32,
    pub main_thread_cpu_frame_time: f32,
    pub main_thread_cpu_present_wait_time: f32,
    pub render_thread_cpu_frame_time: f32,
    pub gpu_frame_time: f32,
}

impl FrameRecord {
    /// Convert into a sample, deriving the rate field when the record
    /// omitted it.
    pub fn into_sample(self) -> FrameSample {
        if self.frames_per_second > 0.0 {
            FrameSample {
                frames_per_second: self.frames_per_second,
                full_frame_time: self.full_frame_time,
                main_thread_cpu_frame_time: self.main_thread_cpu_frame_time,
                main_thread_cpu_present_wait_time: self.main_thread_cpu_present_wait_time,
                render_thread_cpu_frame_time: self.render_thread_cpu_frame_time,
                gpu_frame_time: self.gpu_frame_time,
            }
        } else {
            FrameSample::from_frame_times(
                self.full_frame_time,
                self.main_thread_cpu_frame_time,
                self.main_thread_cpu_present_wait_time,
                self.render_thread_cpu_frame_time,
                self.gpu_frame_time,
            )
        }
    }
}

/// Read a frame log from a file path.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Vec<FrameSample>> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(FrameLogError::NotFound(path_ref.to_path_buf()));
    }

    let file = File::open(path_ref)?;
    let samples = read_lines(BufReader::new(file))?;
    debug!(
        frames = samples.len(),
        path = %path_ref.display(),
        "frame log loaded"
    );
    Ok(samples)
}

/// Read a frame log from any buffered reader (file or stdin).
///
/// Parse failures carry the 1-based line number of the offending record.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<FrameSample>> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let record: FrameRecord =
            serde_json::from_str(trimmed).map_err(|source| FrameLogError::Parse {
                line: index + 1,
                source,
            })?;
        samples.push(record.into_sample());
    }

    Ok(samples)
}
