//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run_with_project`: set up the terminal, state and action context
//! - `run_loop`: drain background messages, draw, poll terminal events

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use edgebench_app::actions::ActionContext;
use edgebench_app::clipboard::Osc52Clipboard;
use edgebench_app::config::Settings;
use edgebench_app::editor::{resolve_editor_command, ExternalEditor};
use edgebench_app::export::export_dir;
use edgebench_app::message::Message;
use edgebench_app::process::process_message;
use edgebench_app::signals;
use edgebench_app::state::AppState;
use edgebench_client::AnalysisService;
use edgebench_core::prelude::*;

use crate::launcher::TerminalEditorLauncher;
use crate::{event, render, terminal};

/// Overrides that come from the command line rather than the config file
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Initial editor buffer (replaces the sample snippet)
    pub initial_code: Option<String>,
}

/// Run the TUI against `service` until the user quits
pub async fn run_with_project<S>(
    project_path: &Path,
    settings: Settings,
    service: Arc<S>,
    options: RunOptions,
) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let export_dir: PathBuf = export_dir(settings.export.directory.as_deref());
    let editor_command = resolve_editor_command(settings.editor.command.as_deref());
    info!(
        "Starting edgebench: server={} export_dir={} editor={}",
        settings.server.base_url,
        export_dir.display(),
        editor_command
    );

    let mut state = AppState::with_settings(project_path.to_path_buf(), settings);
    if let Some(code) = options.initial_code {
        state.session.editor.set_value(code);
    }

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut ctx = ActionContext::new(
        service,
        msg_tx,
        Box::new(Osc52Clipboard::stdout()),
        Box::new(TerminalEditorLauncher::new(ExternalEditor::new(editor_command))),
        export_dir,
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let result = run_loop(&mut term, &mut state, msg_rx, &mut ctx);
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    ctx: &mut ActionContext<S>,
) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks, timers and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        // The external editor leaves the screen stale
        if state.take_redraw_request() {
            terminal.clear()?;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, ctx);
        }
    }

    Ok(())
}
