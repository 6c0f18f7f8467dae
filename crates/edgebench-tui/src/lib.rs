//! edgebench-tui - Terminal UI for edgebench
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the view function and its widgets, the run loop, and the terminal side of
//! external editing (suspending the alternate screen while the editor runs).

pub mod event;
pub mod launcher;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use launcher::TerminalEditorLauncher;
pub use runner::{run_with_project, RunOptions};
