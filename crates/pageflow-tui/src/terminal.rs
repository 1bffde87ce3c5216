//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::SetTitle;
use pageflow_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enable mouse reporting so wheel and press/release events reach the loop
pub fn enable_mouse_capture() -> Result<()> {
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("failed to enable mouse capture: {e}")))
}

pub fn disable_mouse_capture() -> Result<()> {
    crossterm::execute!(std::io::stdout(), DisableMouseCapture)
        .map_err(|e| Error::terminal(format!("failed to disable mouse capture: {e}")))
}

/// Mirror the active section id into the terminal title
pub fn set_title(title: &str) -> Result<()> {
    crossterm::execute!(std::io::stdout(), SetTitle(title))
        .map_err(|e| Error::terminal(format!("failed to set terminal title: {e}")))
}
