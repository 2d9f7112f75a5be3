//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "glowrise.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/glow-rise/logs/glowrise.log.YYYY-MM-DD`
/// so that stdout stays free for the terminal UI and for headless NDJSON output.
/// Log level is controlled by the `GLOWRISE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GLOWRISE_LOG=debug glowrise
/// GLOWRISE_LOG=glowrise_core=trace glowrise --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via GLOWRISE_LOG
    let env_filter = EnvFilter::try_from_env("GLOWRISE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("glowrise=info,glow_rise=info,warn"));

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
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Glow Rise starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(log_directory_in(&base))
}

fn log_directory_in(base: &Path) -> PathBuf {
    base.join("glow-rise").join("logs")
}
