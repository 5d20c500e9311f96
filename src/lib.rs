//! Fotograma - Frame-time sampler with GPU/CPU bottleneck classification
//!
//! This library provides the core functionality for sampling per-frame timing
//! channels of real-time rendering workloads, with rolling min/avg/max
//! aggregation, bottleneck classification, and a rolling bottleneck histogram.

pub mod bottleneck;
pub mod bottleneck_history;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod frame_log;
pub mod json_output;
pub mod sample;
pub mod sample_history;
pub mod sampler;
pub mod session;
pub mod synthetic;
