//! Optional TOML configuration file
//!
//! Settings resolve in three layers: CLI flags override file values, file
//! values override built-in defaults. Only the keys a file actually sets
//! participate, so a partial file is fine:
//!
//! ```toml
//! [sampler]
//! sample_window = 30
//! bottleneck_window = 60
//!
//! [output]
//! format = "text"
//! every = 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::cli::OutputFormat;

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Parsed configuration file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub sampler: SamplerSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// `[sampler]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamplerSection {
    pub sample_window: Option<usize>,
    pub bottleneck_window: Option<usize>,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub every: Option<u64>,
}

impl ConfigFile {
    /// Load and parse a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ConfigError::NotFound(path_ref.to_path_buf()));
        }

        let contents = fs::read_to_string(path_ref)?;
        let config: ConfigFile = toml::from_str(&contents)?;
        debug!(path = %path_ref.display(), "config file loaded");
        Ok(config)
    }
}
