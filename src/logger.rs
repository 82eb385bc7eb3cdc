//! File logging behind the `log` facade
//!
//! Call sites use the `log` macros; this module wires them to a fern
//! dispatch writing to a file in the platform data directory. Logging is
//! opt-in via configuration and initialized at most once per process.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static INIT: OnceCell<()> = OnceCell::new();

/// Initialize file logging when enabled. Safe to call more than once;
/// only the first call installs the dispatcher.
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    INIT.get_or_try_init(|| -> Result<()> {
        let path = log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .chain(
                fern::log_file(&path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )
            .apply()
            .context("Logger already initialized")?;

        Ok(())
    })?;

    Ok(())
}

/// Path of the log file in the platform data directory.
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("timedock").join("timedock.log"))
}
