//! Log file setup.
//!
//! The TUI owns stdout, so tracing events go to a file under the user cache
//! directory instead:
//! - Linux: `~/.cache/finboard/finboard.log`
//! - macOS: `~/Library/Caches/finboard/finboard.log`
//!
//! The filter is read from `FINBOARD_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use color_eyre::{Result, eyre::eyre};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::state::config::APP_NAME;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FINBOARD_LOG";

const LOG_FILE: &str = "finboard.log";

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Returns the log file path.
///
/// # Errors
///
/// Returns an error if the cache directory is unknown, the log file cannot
/// be opened, or a subscriber is already installed. Callers should treat
/// this as a warning; the app works without logs.
pub fn init() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| eyre!("Could not determine cache directory"))?
        .join(APP_NAME);
    let path = dir.join(LOG_FILE);
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("Failed to install log subscriber: {err}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "finboard starting");
    Ok(path)
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens `path` for appending, creating parent directories as needed.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parents_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE);

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
