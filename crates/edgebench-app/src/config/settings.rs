//! Settings parser for .edgebench/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use edgebench_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const EDGEBENCH_DIR: &str = ".edgebench";

/// Path of the settings file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(EDGEBENCH_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.edgebench/config.toml`
///
/// A missing or unreadable file yields defaults; problems are logged, never
/// fatal.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in `.edgebench/`
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let dir = project_path.join(EDGEBENCH_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .edgebench dir: {}", e)))?;
    }

    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        std::fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
        info!("Created default config at {:?}", path);
    }

    Ok(path)
}

const DEFAULT_CONFIG: &str = r#"# edgebench configuration

[server]
# Analysis service base URL (POST /analyze, POST /export)
base_url = "http://127.0.0.1:5000"
timeout_secs = 30

[ui]
# "light" or "dark"
theme = "light"
notification_ms = 3000
copy_feedback_ms = 2000

[editor]
# Defaults to $VISUAL, then $EDITOR, then vi
# command = "nvim"

[export]
# Defaults to the platform download directory
# directory = "/tmp/exports"
# "pytest" or "unittest"
format = "pytest"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use edgebench_core::Theme;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_config_returns_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_invalid_config_returns_defaults() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(EDGEBENCH_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "[ui\ntheme = ").unwrap();

        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_custom_config() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(EDGEBENCH_DIR)).unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[ui]\ntheme = \"dark\"\n[editor]\ncommand = \"nano\"\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.ui.theme, Theme::Dark);
        assert_eq!(settings.editor.command.as_deref(), Some("nano"));
    }

    #[test]
    fn test_init_writes_parseable_defaults() {
        let dir = tempdir().unwrap();
        let path = init_config_dir(dir.path()).unwrap();

        assert!(path.exists());
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(EDGEBENCH_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "[ui]\ntheme = \"dark\"\n").unwrap();

        init_config_dir(dir.path()).unwrap();
        assert_eq!(load_settings(dir.path()).ui.theme, Theme::Dark);
    }
}
