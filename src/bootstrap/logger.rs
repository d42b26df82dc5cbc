//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after the effective level is known.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initialise the global tracing subscriber, writing to stderr.
///
/// When `cli_level` is `true` the caller's `level` came from `-v` flags and
/// beats `RUST_LOG`; otherwise `RUST_LOG` wins and `level` (from config) is
/// the fallback.
pub fn init(level: &str, cli_level: bool) -> Result<(), AppError> {
    let filter = if cli_level {
        EnvFilter::try_new(level)
            .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}
