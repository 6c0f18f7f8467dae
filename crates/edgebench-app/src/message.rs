//! Message types for the application (TEA pattern)

use std::path::PathBuf;
use std::sync::Arc;

use edgebench_core::{AnalysisResponse, CategoryFilter};

use crate::input_key::InputKey;
use crate::notifications::{BannerId, BannerLevel};
use crate::report::{CardId, CaseId};
use crate::session::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    ToggleHelp,

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────
    /// Send the editor buffer to the analysis service
    Analyze,

    AnalysisCompleted {
        request: RequestId,
        response: AnalysisResponse,
    },

    AnalysisFailed {
        request: RequestId,
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Filter
    // ─────────────────────────────────────────────────────────
    SelectFilter(CategoryFilter),
    NextFilter,
    PreviousFilter,
    /// 0 = all, n = n-th filter bar entry
    SelectFilterIndex(usize),

    // ─────────────────────────────────────────────────────────
    // Report navigation and controls
    // ─────────────────────────────────────────────────────────
    ToggleCard(CardId),
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    /// Activate the control under the cursor
    ActivateControl,
    /// Copy the snippet of the case under the cursor
    CopyAtCursor,

    // ─────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────
    CopySnippet {
        case: CaseId,
        snippet: Arc<str>,
    },
    CopyCompleted {
        case: CaseId,
    },
    CopyFailed {
        message: String,
    },
    CopyLabelExpired {
        case: CaseId,
        token: u64,
    },

    // ─────────────────────────────────────────────────────────
    // Editor
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    /// Open the buffer in the external editor
    EditBuffer,
    BufferEdited {
        text: String,
    },
    EditFailed {
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────
    Export,
    CycleExportFormat,
    ExportCompleted {
        path: PathBuf,
    },
    ExportFailed {
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────
    Notify {
        level: BannerLevel,
        message: String,
    },
    BannerExpired(BannerId),
}

impl Message {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify {
            level: BannerLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Notify {
            level: BannerLevel::Info,
            message: message.into(),
        }
    }
}
