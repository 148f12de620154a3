//! Terminal setup and teardown.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

/// Raw mode, alternate screen and mouse capture for as long as it lives.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn start() -> color_eyre::Result<Self> {
        let terminal = ratatui::init();
        if let Err(err) = execute!(std::io::stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(err.into());
        }
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(std::io::stdout(), DisableMouseCapture) {
            tracing::warn!(%err, "failed to disable mouse capture");
        }
        ratatui::restore();
    }
}
