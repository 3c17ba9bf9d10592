//! Logging setup
//!
//! The TUI owns the terminal, so all diagnostics go to
//! `logs/chain-console.log` under the config directory. `RUST_LOG` overrides
//! the level from the settings file.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{ClientPaths, Settings};
use crate::error::ClientError;

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "chain-console.log";

/// Build the filter: `RUST_LOG` if set and valid, else the configured level
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// until the process exits.
pub fn init(paths: &ClientPaths, settings: &Settings) -> Result<WorkerGuard, ClientError> {
    paths.ensure_directories()?;

    let file_appender = tracing_appender::rolling::never(paths.log_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(file_layer.with_filter(env_filter(settings)))
        .try_init()
        .map_err(|e| ClientError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
