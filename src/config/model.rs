//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The three user-tintable colors, as CSS color strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorsConfig {
    /// Screen background.
    #[serde(default = "default_background")]
    pub background: String,
    /// Die card fill.
    #[serde(default = "default_die")]
    pub die: String,
    /// Die label and value text.
    #[serde(default = "default_font")]
    pub font: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            die: default_die(),
            font: default_font(),
        }
    }
}

/// UI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hints in the status bar.
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// How long transient status messages stay visible.
    #[serde(default = "default_status_message_secs")]
    pub status_message_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_hints: true,
            status_message_secs: default_status_message_secs(),
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Maximum level written to the log file (`error` .. `trace`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_background() -> String {
    "#000814".to_string()
}
fn default_die() -> String {
    "#001d3d".to_string()
}
fn default_font() -> String {
    "#e0e1dd".to_string()
}
fn default_true() -> bool {
    true
}
fn default_status_message_secs() -> u64 {
    4
}
fn default_log_dir() -> String {
    "~/.local/share/dicetower/logs".to_string()
}
fn default_log_level() -> String {
    "debug".to_string()
}
