//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use std::sync::Arc;
use std::time::Duration;

use edgebench_core::ExportFormat;

use crate::message::Message;
use crate::notifications::BannerId;
use crate::report::CaseId;
use crate::session::RequestId;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// POST the buffer to `/analyze`
    AnalyzeCode { request: RequestId, code: String },

    /// POST the buffer to `/export` and save the result
    ExportTests { code: String, format: ExportFormat },

    /// Place a snippet on the system clipboard
    CopyToClipboard { case: CaseId, snippet: Arc<str> },

    /// Revert a copy label after `after`
    ScheduleCopyReset {
        case: CaseId,
        token: u64,
        after: Duration,
    },

    /// Remove a banner after `after`
    ScheduleBannerExpiry { id: BannerId, after: Duration },

    /// Suspend the UI and edit the buffer externally
    OpenExternalEditor { text: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
