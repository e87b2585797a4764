//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "LOGTINT_LOG";

const DEFAULT_FILTER: &str = "logtint=info,logtint_app=info,logtint_beautify=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/logtint/logs/`, never to stdout:
/// stdout carries the beautified stream.
/// Log level is controlled by the `LOGTINT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LOGTINT_LOG=debug ./gradlew bootRun | logtint
/// LOGTINT_LOG=logtint_beautify=trace ./gradlew bootRun | logtint
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "logtint.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| crate::error::Error::terminal(e.to_string()))?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("logtint starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("logtint").join("logs"))
}
