//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use edgebench_core::{AppPhase, ExportFormat};

use crate::config::Settings;
use crate::editor::SAMPLE_CODE;
use crate::notifications::Notifications;
use crate::report::{ControlId, ReportPanel};
use crate::session::Session;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Editor, filter bar and report
    #[default]
    Normal,

    /// Key binding overlay
    Help,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    pub ui_mode: UiMode,

    /// Settings from .edgebench/config.toml plus CLI overrides
    pub settings: Settings,

    pub project_path: PathBuf,

    /// Theme, filter, editor and request sequencing
    pub session: Session,

    /// Rendered analysis report
    pub report: ReportPanel,

    pub notifications: Notifications,

    /// Format used by the next export
    pub export_format: ExportFormat,

    /// Index into `report.control_order()`
    pub cursor: usize,

    /// Analyze requests not yet answered
    pub analyses_in_flight: usize,

    /// Export requests not yet answered
    pub exports_in_flight: usize,

    /// Path of the most recent successful export
    pub last_export: Option<PathBuf>,

    redraw_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(PathBuf::from("."), Settings::default())
    }

    /// Create state from loaded settings, with the sample buffer
    pub fn with_settings(project_path: PathBuf, settings: Settings) -> Self {
        let session = Session::new(settings.ui.theme, SAMPLE_CODE);
        let export_format = settings.export.format;
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            settings,
            project_path,
            session,
            report: ReportPanel::default(),
            notifications: Notifications::default(),
            export_format,
            cursor: 0,
            analyses_in_flight: 0,
            exports_in_flight: 0,
            last_export: None,
            redraw_requested: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyses_in_flight > 0
    }

    pub fn is_exporting(&self) -> bool {
        self.exports_in_flight > 0
    }

    /// Control currently under the cursor, if any
    pub fn selected_control(&self) -> Option<ControlId> {
        self.report.control_order().get(self.cursor).copied()
    }

    /// Keep the cursor inside the control list after it changed shape
    pub fn clamp_cursor(&mut self) {
        let len = self.report.control_order().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Ask the runner for a full repaint (after the external editor ran)
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
