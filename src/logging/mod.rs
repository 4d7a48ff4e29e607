//! Application logging functionality
//!
//! Logs go to stderr by default, or to a dated file under the config
//! directory with `--log-file`. `RUST_LOG` overrides the default level.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::core::config_file::ConfigFile;
use crate::core::settings::APP_NAME;

const DEFAULT_FILTER: &str = "info";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Get the file name of today's log
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("{}-{}.log", APP_NAME, timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Install the global tracing subscriber
///
/// When logging to a file, the returned guard must be held until exit so
/// buffered lines are flushed.
pub fn init_logging(to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;
        return Ok(None);
    }

    initialize_logs_directory()?;
    let appender = tracing_appender::rolling::never(logs_dir(), current_log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;

    tracing::info!(
        "=== {} started at {} ===",
        APP_NAME,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    tracing::debug!("Logging to {:?}", current_log_file());
    Ok(Some(guard))
}
