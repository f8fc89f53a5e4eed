//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so log output goes to `catswipe.log` next to
//! the database instead of stderr. The filter is read from `CATSWIPE_LOG`
//! and defaults to `warn`.

use crate::CatswipeError;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "CATSWIPE_LOG";

/// Log file name inside the log directory
pub const LOG_FILE: &str = "catswipe.log";

/// Install the global subscriber, appending to `<dir>/catswipe.log`
///
/// # Errors
///
/// Returns `CatswipeError` if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init(dir: &Path) -> Result<PathBuf, CatswipeError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CatswipeError::Logging(e.to_string()))?;

    Ok(path)
}
