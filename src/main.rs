use anyhow::Result;
use clap::Parser;
use fotograma::{
    cli::Cli,
    config::ConfigFile,
    session::{self, SessionConfig},
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate target_fps range (must be > 0)
    if args.target_fps <= 0.0 {
        anyhow::bail!(
            "Invalid value for --target-fps: {} (must be > 0)",
            args.target_fps
        );
    }

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    // Load TOML configuration file if provided
    let file_config = if let Some(config_path) = &args.config {
        ConfigFile::from_file(config_path)?
    } else {
        ConfigFile::default()
    };

    // CLI flags win over config-file values, which win over built-in defaults
    let config = SessionConfig::merge(&args, &file_config)?;

    // Either replay a frame log or generate a synthetic workload (mutually exclusive)
    session::run_session(&args, config)?;

    Ok(())
}
