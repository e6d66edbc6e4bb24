//! Structured logging setup using the `tracing` ecosystem.
//!
//! Logs go to stderr in compact form and to a daily-rotated `mediasite.log`,
//! which can be written as JSON lines for log shippers.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::{MsError, MsResult};

/// Base name of the rotated log file.
const LOG_FILE_PREFIX: &str = "mediasite.log";

/// Keeps the background log writer alive. Dropping it flushes the file.
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Parse a filter directive, falling back to `info` when it is invalid.
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn console_layer() -> Box<dyn Layer<Registry> + Send + Sync> {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .boxed()
}

/// Install the global subscriber: console plus rolling file.
///
/// `level` is an `EnvFilter` directive such as `"info"` or
/// `"ms_api=debug,info"`. Fails if a global subscriber is already set.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> MsResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;
    let (writer, worker) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);
    let file_layer: Box<dyn Layer<Registry> + Send + Sync> = if json_output {
        file_layer.json().boxed()
    } else {
        file_layer.boxed()
    };

    tracing_subscriber::registry()
        .with(vec![console_layer(), file_layer])
        .with(filter_for(level))
        .try_init()
        .map_err(|e| MsError::Config(format!("logging already initialized: {e}")))?;

    tracing::debug!("logging to {} at level {}", log_dir.display(), level);
    Ok(LogGuard { _worker: worker })
}

/// [`init_logging`] driven by a [`LoggingConfig`].
pub fn init_from_config(config: &LoggingConfig, log_dir: &Path) -> MsResult<LogGuard> {
    init_logging(&config.level, log_dir, config.json_output)
}

/// Console-only logging for tests and short-lived tools. Does nothing if a
/// subscriber is already installed.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(console_layer())
        .with(filter_for(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logging_is_idempotent() {
        init_console_logging("debug");
        init_console_logging("info");
    }
}
