//! Terminal setup and restoration

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use edgebench_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Hand the terminal back to the shell (cooked mode, main screen)
pub fn suspend() -> Result<()> {
    disable_raw_mode().map_err(|e| Error::terminal(format!("disable raw mode: {e}")))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| Error::terminal(format!("leave alternate screen: {e}")))?;
    Ok(())
}

/// Take the terminal back after [`suspend`]
///
/// Failure here leaves no usable screen, so it is reported as a fatal
/// [`Error::TerminalInit`].
pub fn resume() -> Result<()> {
    enable_raw_mode().map_err(|e| Error::TerminalInit(format!("enable raw mode: {e}")))?;
    execute!(io::stdout(), EnterAlternateScreen)
        .map_err(|e| Error::TerminalInit(format!("enter alternate screen: {e}")))?;
    Ok(())
}
