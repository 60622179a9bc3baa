//! Log file setup
//!
//! The TUI owns stdout, so tracing output only goes to a file and only when
//! one is requested. The filter comes from `CRTTERM_LOG` (same syntax as
//! `RUST_LOG`) and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter.
pub const LOG_FILTER_ENV: &str = "CRTTERM_LOG";

/// Build the filter from the environment.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber appending plain-text events to `path`.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::debug!(path = %path.display(), "file logging enabled");
    Ok(())
}
