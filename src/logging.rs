//! Logging setup.
//!
//! Structured logging via the `tracing` crate. Log lines go to stderr so they
//! never interleave with prompt and diagnostic output on stdout. Level
//! precedence: CLI flag, then `RUST_LOG`, then `info`.

use crate::error::FleetError;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Safe to call once per process.
pub fn init(cli_level: Option<&str>) -> Result<(), FleetError> {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| FleetError::Config(format!("invalid log level '{}': {}", level, e)))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| FleetError::Config(format!("failed to initialize logging: {}", e)))
}
