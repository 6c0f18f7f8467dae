//! Configuration types

use std::path::PathBuf;
use std::time::Duration;

use edgebench_core::{ExportFormat, Theme};
use serde::{Deserialize, Serialize};

/// Application settings (.edgebench/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Analysis service connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL; `/analyze` and `/export` are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme at startup (not persisted when toggled)
    #[serde(default)]
    pub theme: Theme,

    /// How long a notification banner stays on screen
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// How long a copy control shows its confirmation label
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

impl UiSettings {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn copy_feedback_duration(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            notification_ms: default_notification_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

fn default_notification_ms() -> u64 {
    3000
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

/// External editor settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Editor command; falls back to $VISUAL, $EDITOR, then `vi`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Export settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Download directory; defaults to the platform download directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Initially selected export format
    #[serde(default)]
    pub format: ExportFormat,
}
