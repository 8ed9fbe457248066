use crate::error::{Result, RiskLabError};
use tracing_subscriber::EnvFilter;

/// Default level from `-v`/`-q`; `RUST_LOG` takes precedence when set.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the stderr subscriber so stdout carries only rendered output.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let level = level_for(verbose, quiet);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| RiskLabError::Telemetry(format!("invalid log filter '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(|e| RiskLabError::Telemetry(e.to_string()))
}
