//! Per-process session context
//!
//! Holds what would otherwise be ambient globals: the theme flag, the active
//! category filter, the editor component and the analyze request counter.

use edgebench_core::prelude::*;
use edgebench_core::Theme;

use crate::editor::{EditorAdapter, EditorOptions};
use crate::filter::FilterController;

/// Identifier of one issued analyze request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic analyze-request counter
///
/// Only the response to the most recently issued request may be applied to
/// the view.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    pub fn latest(&self) -> Option<RequestId> {
        (self.latest > 0).then_some(RequestId(self.latest))
    }
}

#[derive(Debug)]
pub struct Session {
    pub theme: Theme,
    pub filter: FilterController,
    pub editor: EditorAdapter,
    pub requests: RequestSequencer,
}

impl Session {
    /// The editor is created with the color scheme of `theme`, so the flag
    /// and the scheme agree from the start.
    pub fn new(theme: Theme, initial_code: impl Into<String>) -> Self {
        Self {
            theme,
            filter: FilterController::default(),
            editor: EditorAdapter::create(EditorOptions::for_theme(theme), initial_code),
            requests: RequestSequencer::default(),
        }
    }

    /// Flip light/dark and push the matching scheme to the editor
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.editor.set_option("theme", self.theme.editor_scheme()) {
            warn!("Failed to apply editor scheme: {}", e);
        }
        debug!("Theme switched to {}", self.theme);
        self.theme
    }
}
