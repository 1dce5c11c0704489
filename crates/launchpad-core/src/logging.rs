//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "LPAD_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/launchpad-terminal/logs/`.
/// The terminal belongs to the TUI, so nothing is ever written to stdout.
/// Log level is controlled by the `LPAD_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LPAD_LOG=debug cargo run -- /projects/p1
/// LPAD_LOG=launchpad_app=trace cargo run -- p1
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "lpad.log");

    // Default to info for our crates, warn for dependencies
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(concat!(
            "launchpad_terminal=info,launchpad_app=info,",
            "launchpad_chain=info,launchpad_tui=info,warn"
        ))
    });

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
    tracing::info!("Launchpad terminal starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("launchpad-terminal").join("logs"))
}
