//! External editor launch with the TUI suspended

use edgebench_app::editor::{EditorLauncher, ExternalEditor};
use edgebench_core::prelude::*;

use crate::terminal;

/// Runs an [`ExternalEditor`] between suspending and resuming the terminal.
///
/// The screen is stale afterwards; the update for the edit result asks the
/// runner for a full repaint.
pub struct TerminalEditorLauncher {
    editor: ExternalEditor,
}

impl TerminalEditorLauncher {
    pub fn new(editor: ExternalEditor) -> Self {
        Self { editor }
    }
}

impl EditorLauncher for TerminalEditorLauncher {
    fn edit(&mut self, text: &str) -> Result<String> {
        terminal::suspend()?;
        let result = self.editor.run(text);
        if let Err(e) = terminal::resume() {
            error!("Failed to restore terminal after editing: {}", e);
            return Err(e);
        }
        result
    }
}
