//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so tracing output goes to a dated file
//! (`dicetower_<date>.log`) in the configured log directory (default:
//! `~/.local/share/dicetower/logs/`). Disabled unless the config enables it.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::Level;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let filepath = log_dir.join(format!("dicetower_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .with_context(|| format!("Failed to open log file {}", filepath.display()))?;

    let level = config.level.parse::<Level>().unwrap_or(Level::DEBUG);
    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

/// Expand a leading `~/` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_leaves_plain_paths_alone() {
        assert_eq!(expand_home("/var/log/dice"), PathBuf::from("/var/log/dice"));
        assert_eq!(expand_home("relative/logs"), PathBuf::from("relative/logs"));
    }

    #[test]
    fn test_expand_home_resolves_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
