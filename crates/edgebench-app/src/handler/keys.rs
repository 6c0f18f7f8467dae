//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::Help => handle_key_help(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('?') | InputKey::F(1) => Some(Message::ToggleHelp),

        // Analysis and editing
        InputKey::Char('a') | InputKey::CharCtrl('r') => Some(Message::Analyze),
        InputKey::Char('e') => Some(Message::EditBuffer),
        InputKey::Char('t') => Some(Message::ToggleTheme),

        // Category filter
        InputKey::Char('f') | InputKey::Tab => Some(Message::NextFilter),
        InputKey::Char('F') | InputKey::BackTab => Some(Message::PreviousFilter),
        InputKey::Char(c @ '0'..='9') => {
            c.to_digit(10).map(|d| Message::SelectFilterIndex(d as usize))
        }

        // Export
        InputKey::Char('x') => Some(Message::Export),
        InputKey::Char('p') => Some(Message::CycleExportFormat),

        // Report navigation
        InputKey::Char('j') | InputKey::Down => Some(Message::CursorDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::CursorUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::CursorTop),
        InputKey::Char('G') | InputKey::End => Some(Message::CursorBottom),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateControl),
        InputKey::Char('c') => Some(Message::CopyAtCursor),

        _ => None,
    }
}

fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('?' | 'q') | InputKey::Esc | InputKey::F(1) => Some(Message::ToggleHelp),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
