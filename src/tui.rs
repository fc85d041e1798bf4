//! Terminal setup, drawing and teardown.

use crate::platform::{Surface, Viewport};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use tracing::debug;

/// Owns the terminal for the lifetime of the UI.
///
/// The terminal is restored by [`exit`](Tui::exit), and again on drop if the
/// UI was left without calling it.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Raw mode, alternate screen and mouse capture
    pub fn enter(&mut self, title: &str) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on exit has something to undo, even if the rest fails
        self.entered = true;
        execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(title)
        )
        .context("Failed to setup terminal")?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        debug!("Terminal entered");
        Ok(())
    }

    /// The terminal to draw frames on, see [`draw_frame`]
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to restore terminal")?;
        self.terminal.show_cursor()?;
        debug!("Terminal restored");
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Draw one frame of the `logical` canvas on any backend.
///
/// Returns the mapping used, so pointer input can be translated against
/// what is on screen.
pub fn draw_frame<B, F>(
    terminal: &mut Terminal<B>,
    logical: (i32, i32),
    render: F,
) -> Result<Viewport>
where
    B: Backend,
    F: FnOnce(&mut Surface),
{
    let mut viewport = None;
    terminal
        .draw(|frame| {
            let mut surface = Surface::new(frame.buffer_mut(), logical);
            render(&mut surface);
            viewport = Some(surface.viewport());
        })
        .map_err(|e| anyhow::anyhow!("Failed to draw frame: {e}"))?;
    viewport.context("Frame was not rendered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_frame_reports_viewport() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let viewport = draw_frame(&mut terminal, (1000, 800), |surface| {
            surface.text_centered(
                crate::geometry::Point::new(500, 400),
                "hi",
                &crate::platform::Font::system(20),
                crate::styles::Rgb(255, 255, 255),
            );
        })
        .unwrap();
        assert_eq!(viewport.cell_width(), 10);
        assert_eq!(viewport.cell_height(), 20);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("hi"));
    }
}
