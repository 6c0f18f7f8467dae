//! Main update function - handles state transitions (TEA pattern)

use edgebench_client::require_code;
use edgebench_core::prelude::*;
use edgebench_core::{AppPhase, CategoryFilter};

use crate::message::Message;
use crate::notifications::BannerLevel;
use crate::report::{ControlId, ReportModel};
use crate::session::RequestId;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::ToggleHelp => {
            state.ui_mode = match state.ui_mode {
                UiMode::Normal => UiMode::Help,
                UiMode::Help => UiMode::Normal,
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis
        // ─────────────────────────────────────────────────────────
        Message::Analyze => handle_analyze(state),

        Message::AnalysisCompleted { request, response } => {
            state.analyses_in_flight = state.analyses_in_flight.saturating_sub(1);
            if !state.session.requests.is_latest(request) {
                debug!("Discarding stale analysis response #{}", request.value());
                return UpdateResult::none();
            }
            let model = ReportModel::build(response);
            info!(
                "Rendering {} function(s), {} edge case(s)",
                model.functions.len(),
                model.case_count()
            );
            state.report.render(model);
            state.session.filter.apply(&mut state.report);
            state.cursor = 0;
            UpdateResult::none()
        }

        Message::AnalysisFailed { request, message } => {
            handle_analysis_failed(state, request, message)
        }

        // ─────────────────────────────────────────────────────────
        // Filter
        // ─────────────────────────────────────────────────────────
        Message::SelectFilter(filter) => select_filter(state, filter),

        Message::NextFilter => {
            let next = state
                .session
                .filter
                .cycled(state.report.categories(), true);
            select_filter(state, next)
        }

        Message::PreviousFilter => {
            let previous = state
                .session
                .filter
                .cycled(state.report.categories(), false);
            select_filter(state, previous)
        }

        Message::SelectFilterIndex(index) => {
            let options = state.session.filter.options(state.report.categories());
            match options.into_iter().nth(index) {
                Some(filter) => select_filter(state, filter),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Report navigation and controls
        // ─────────────────────────────────────────────────────────
        Message::ToggleCard(card) => {
            state.report.toggle(card);
            state.clamp_cursor();
            UpdateResult::none()
        }

        Message::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::CursorDown => {
            state.cursor += 1;
            state.clamp_cursor();
            UpdateResult::none()
        }

        Message::CursorTop => {
            state.cursor = 0;
            UpdateResult::none()
        }

        Message::CursorBottom => {
            state.cursor = usize::MAX;
            state.clamp_cursor();
            UpdateResult::none()
        }

        Message::ActivateControl => match state.selected_control() {
            Some(id) => activate(state, id),
            None => UpdateResult::none(),
        },

        Message::CopyAtCursor => match state.selected_control() {
            Some(id @ ControlId::Copy(_)) => activate(state, id),
            _ => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Clipboard
        // ─────────────────────────────────────────────────────────
        Message::CopySnippet { case, snippet } => {
            UpdateResult::action(UpdateAction::CopyToClipboard { case, snippet })
        }

        Message::CopyCompleted { case } => match state.report.confirm_copy(case) {
            Some(token) => UpdateResult::action(UpdateAction::ScheduleCopyReset {
                case,
                token,
                after: state.settings.ui.copy_feedback_duration(),
            }),
            None => UpdateResult::none(),
        },

        Message::CopyFailed { message } => UpdateResult::message(Message::error(message)),

        Message::CopyLabelExpired { case, token } => {
            state.report.reset_copy_label(case, token);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editor
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.session.toggle_theme();
            UpdateResult::none()
        }

        Message::EditBuffer => UpdateResult::action(UpdateAction::OpenExternalEditor {
            text: state.session.editor.get_value().to_string(),
        }),

        Message::BufferEdited { text } => {
            state.session.editor.set_value(text);
            state.request_redraw();
            UpdateResult::none()
        }

        Message::EditFailed { message } => {
            state.request_redraw();
            UpdateResult::message(Message::error(message))
        }

        // ─────────────────────────────────────────────────────────
        // Export
        // ─────────────────────────────────────────────────────────
        Message::Export => {
            state.exports_in_flight += 1;
            UpdateResult::action(UpdateAction::ExportTests {
                code: state.session.editor.get_value().to_string(),
                format: state.export_format,
            })
        }

        Message::CycleExportFormat => {
            state.export_format = state.export_format.next();
            UpdateResult::none()
        }

        Message::ExportCompleted { path } => {
            state.exports_in_flight = state.exports_in_flight.saturating_sub(1);
            let notice = format!("Saved {}", path.display());
            state.last_export = Some(path);
            UpdateResult::message(Message::info(notice))
        }

        Message::ExportFailed { message } => {
            state.exports_in_flight = state.exports_in_flight.saturating_sub(1);
            UpdateResult::message(Message::error(message))
        }

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::Notify { level, message } => {
            if level == BannerLevel::Error {
                warn!("{}", message);
            }
            let id = state.notifications.notify(level, message);
            UpdateResult::action(UpdateAction::ScheduleBannerExpiry {
                id,
                after: state.settings.ui.notification_duration(),
            })
        }

        Message::BannerExpired(id) => {
            state.notifications.dismiss(id);
            UpdateResult::none()
        }
    }
}

/// Guard the buffer, then issue a sequenced request
fn handle_analyze(state: &mut AppState) -> UpdateResult {
    let code = state.session.editor.get_value();
    if let Err(e) = require_code(code) {
        return UpdateResult::message(Message::error(e.to_string()));
    }

    let code = code.to_string();
    let request = state.session.requests.issue();
    state.analyses_in_flight += 1;
    debug!("Issuing analysis request #{}", request.value());
    UpdateResult::action(UpdateAction::AnalyzeCode { request, code })
}

/// Failures are reported even when a newer request is outstanding; the
/// rendered report is left as it was.
fn handle_analysis_failed(state: &mut AppState, request: RequestId, message: String) -> UpdateResult {
    state.analyses_in_flight = state.analyses_in_flight.saturating_sub(1);
    if !state.session.requests.is_latest(request) {
        debug!("Analysis request #{} failed after a newer one was issued", request.value());
    }
    UpdateResult::message(Message::error(message))
}

fn select_filter(state: &mut AppState, filter: CategoryFilter) -> UpdateResult {
    if state.session.filter.select(filter, &mut state.report) {
        state.clamp_cursor();
    }
    UpdateResult::none()
}

fn activate(state: &AppState, id: ControlId) -> UpdateResult {
    match state.report.binding(id) {
        Some(binding) => UpdateResult::message(binding.activate()),
        None => {
            warn!("No handler registered for {:?}", id);
            UpdateResult::none()
        }
    }
}
