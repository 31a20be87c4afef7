//! Logging setup
//!
//! Log output goes to stderr through a non-blocking writer so that stdout
//! carries only the check report.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Build the filter from `SDK_VERSION_GATE_LOG`, falling back to the default
pub fn env_filter() -> EnvFilter {
    env_filter_from(std::env::var(LOG_ENV).ok())
}

fn env_filter_from(directive: Option<String>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped and must be
/// held until the program exits.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}
