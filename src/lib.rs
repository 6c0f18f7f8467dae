//! edgebench library
//!
//! Wires the member crates together for the binary: settings plus command
//! line overrides, logging, the HTTP analysis client and the TUI runner.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use edgebench_app::config::{self, Settings};
use edgebench_client::HttpAnalysisClient;
use edgebench_core::prelude::*;
use edgebench_core::{logging, ExportFormat, Theme};
use edgebench_tui::RunOptions;

/// Values given on the command line; each one wins over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub file: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub export_dir: Option<PathBuf>,
    pub dark: bool,
}

impl CliOverrides {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(server) = &self.server {
            settings.server.base_url = server.clone();
        }
        if let Some(format) = self.format {
            settings.export.format = format;
        }
        if let Some(dir) = &self.export_dir {
            settings.export.directory = Some(dir.clone());
        }
        if self.dark {
            settings.ui.theme = Theme::Dark;
        }
        settings
    }
}

/// Read the file that seeds the editor buffer
fn read_initial_code(file: Option<&Path>) -> Result<Option<String>> {
    file.map(|path| {
        std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))
    })
    .transpose()
}

/// Write the default `.edgebench/config.toml` and report where it went
pub fn init_config(project_path: &Path) -> Result<PathBuf> {
    config::init_config_dir(project_path)
}

/// Run the workbench for `project_path`
///
/// Expects `color_eyre` to be installed by the caller.
pub async fn run_with_project(project_path: &Path, overrides: CliOverrides) -> Result<()> {
    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    info!("Project path: {}", project_path.display());

    let settings = overrides.apply(config::load_settings(project_path));
    let initial_code = read_initial_code(overrides.file.as_deref())?;

    let client = HttpAnalysisClient::new(&settings.server.base_url, settings.server.timeout())?;

    let result = edgebench_tui::run_with_project(
        project_path,
        settings,
        Arc::new(client),
        RunOptions { initial_code },
    )
    .await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("edgebench exiting");
    result
}
