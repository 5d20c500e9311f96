// Frame log replay: CLI integration tests for TRACE input, output formats,
// summary mode, and the settings precedence chain.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// One GPU-bound frame record per line: full 10 ms, gpu 9 ms, cpu channels
/// small. Classifies as "gpu" (margin 8 ms).
fn gpu_bound_log(frames: usize) -> String {
    let line = r#"{"full_frame_time":10.0,"main_thread_cpu_frame_time":1.0,"main_thread_cpu_present_wait_time":0.2,"render_thread_cpu_frame_time":1.0,"gpu_frame_time":9.0}"#;
    let mut log = String::new();
    for _ in 0..frames {
        log.push_str(line);
        log.push('\n');
    }
    log
}

fn write_frame_log(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Text Output
// ============================================================================

#[test]
fn test_replay_text_stream() {
    // Default format streams one line per frame to stdout and prints the
    // summary table to stderr
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(5));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("frame"))
        .stdout(predicate::str::contains("[gpu]"))
        .stderr(predicate::str::contains("Frame Timing Summary"))
        .stderr(predicate::str::contains("Bottleneck distribution"));
}

#[test]
fn test_replay_summary_only_suppresses_stream() {
    // -c prints nothing to stdout in text mode; the summary goes to stderr
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(5));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Frame Timing Summary"))
        .stderr(predicate::str::contains("GPU bound:"));
}

#[test]
fn test_replay_summary_lists_all_channels() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(3));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c").arg(&log);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("frames_per_second"))
        .stderr(predicate::str::contains("full_frame_time"))
        .stderr(predicate::str::contains("main_thread_cpu_frame_time"))
        .stderr(predicate::str::contains("main_thread_cpu_present_wait_time"))
        .stderr(predicate::str::contains("render_thread_cpu_frame_time"))
        .stderr(predicate::str::contains("gpu_frame_time"));
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_replay_json_structure() {
    // JSON output has version, format, timeline, and summary fields
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(5));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("--format").arg("json").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"version\""))
        .stdout(predicate::str::contains("\"format\": \"fotograma-json-v1\""))
        .stdout(predicate::str::contains("\"timeline\""))
        .stdout(predicate::str::contains("\"summary\""))
        .stdout(predicate::str::contains("\"bottleneck\": \"gpu\""));
}

#[test]
fn test_replay_json_summary_only_omits_timeline() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(5));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c").arg("--format").arg("json").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"timeline\"").not())
        .stdout(predicate::str::contains("\"frames\": 5"))
        .stdout(predicate::str::contains("\"histogram\""));
}

#[test]
fn test_replay_json_reports_window_sizes() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(10));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c")
        .arg("--format")
        .arg("json")
        .arg("-w")
        .arg("4")
        .arg("-b")
        .arg("8")
        .arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sample_window\": 4"))
        .stdout(predicate::str::contains("\"bottleneck_window\": 8"));
}

#[test]
fn test_replay_every_throttles_timeline() {
    // --every 2 over 4 frames emits ticks 2 and 4 only
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(4));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("--format").arg("json").arg("--every").arg("2").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"tick\": 2"))
        .stdout(predicate::str::contains("\"tick\": 4"))
        .stdout(predicate::str::contains("\"tick\": 1").not())
        .stdout(predicate::str::contains("\"tick\": 3").not());
}

// ============================================================================
// CSV Output
// ============================================================================

#[test]
fn test_replay_csv_timeline() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(3));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("--format").arg("csv").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "tick,frames_per_second,full_frame_time",
        ))
        .stdout(predicate::str::contains(",gpu\n"));
}

#[test]
fn test_replay_csv_summary_only() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(5));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c").arg("--format").arg("csv").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("channel,min,avg,max"))
        .stdout(predicate::str::contains("bottleneck,share"))
        .stdout(predicate::str::contains("gpu,1.0000"));
}

// ============================================================================
// Stdin Input
// ============================================================================

#[test]
fn test_replay_from_stdin() {
    // "-" as TRACE reads frame records from stdin
    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-")
        .arg("-c")
        .arg("--format")
        .arg("json")
        .write_stdin(gpu_bound_log(5));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"frames\": 5"))
        .stdout(predicate::str::contains("\"bottleneck\": \"gpu\""));
}

// ============================================================================
// Log Parsing
// ============================================================================

#[test]
fn test_replay_skips_blanks_and_comments() {
    let tmp_dir = TempDir::new().unwrap();
    let contents = format!(
        "# frame capture 2026-08-12\n\n{}\n# mid-log comment\n{}\n",
        r#"{"full_frame_time":10.0,"main_thread_cpu_frame_time":1.0,"gpu_frame_time":9.0}"#,
        r#"{"full_frame_time":10.0,"main_thread_cpu_frame_time":1.0,"gpu_frame_time":9.0}"#
    );
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &contents);

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c").arg("--format").arg("json").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"frames\": 2"));
}

#[test]
fn test_replay_parse_error_reports_line_number() {
    let tmp_dir = TempDir::new().unwrap();
    let contents = format!("{}not a json record\n", gpu_bound_log(2));
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &contents);

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg(&log);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid frame record at line 3"));
}

#[test]
fn test_replay_missing_file() {
    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("/nonexistent/frames.jsonl");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("frame log not found"));
}

#[test]
fn test_replay_empty_log_is_ok() {
    // Zero frames is legal: the sampler just reports an empty window
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", "");

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c").arg("--format").arg("json").arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"frames\": 0"));
}

// ============================================================================
// Config File and Precedence
// ============================================================================

#[test]
fn test_config_file_sets_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(10));
    let config = tmp_dir.path().join("fotograma.toml");
    fs::write(
        &config,
        "[sampler]\nsample_window = 4\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-c").arg("--config").arg(&config).arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"format\": \"fotograma-json-v1\""))
        .stdout(predicate::str::contains("\"sample_window\": 4"));
}

#[test]
fn test_cli_flags_override_config_file() {
    // Config file asks for JSON; --format csv on the command line wins
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(3));
    let config = tmp_dir.path().join("fotograma.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("csv")
        .arg(&log);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tick,frames_per_second"))
        .stdout(predicate::str::contains("\"format\"").not());
}

#[test]
fn test_missing_config_file_error() {
    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("--config").arg("/nonexistent/fotograma.toml").arg("-");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

// ============================================================================
// Flag Validation
// ============================================================================

#[test]
fn test_invalid_format_error() {
    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("--format").arg("invalid").arg("frames.jsonl");

    cmd.assert().failure().stderr(predicate::str::contains(
        "invalid value 'invalid' for '--format <FORMAT>'",
    ));
}

#[test]
fn test_zero_sample_window_rejected() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(1));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-w").arg("0").arg(&log);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for --sample-window"));
}

#[test]
fn test_zero_bottleneck_window_rejected() {
    let tmp_dir = TempDir::new().unwrap();
    let log = write_frame_log(&tmp_dir, "frames.jsonl", &gpu_bound_log(1));

    let mut cmd = Command::cargo_bin("fotograma").unwrap();
    cmd.arg("-b").arg("0").arg(&log);

    cmd.assert().failure().stderr(predicate::str::contains(
        "Invalid value for --bottleneck-window",
    ));
}

#[test]
fn test_no_input_error() {
    let mut cmd = Command::cargo_bin("fotograma").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Must specify either"));
}
