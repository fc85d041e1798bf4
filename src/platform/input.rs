//! Pointer and quit input.
//!
//! Input is polled once per frame. Terminal mouse events arrive in cell
//! coordinates and are converted to the logical canvas with the viewport of
//! the last presented frame.

use crate::geometry::Point;
use crate::platform::surface::Viewport;
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;

/// Platform input, already in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to leave the program
    Quit,
    /// The pointer moved to a position
    PointerMove(Point),
    /// The primary button was pressed at a position
    PointerClick(Point),
}

/// Input collaborator, polled by the app loop
pub trait InputSource {
    /// Wait at most `timeout` for input and return everything pending
    fn poll(&mut self, timeout: Duration) -> Result<Vec<InputEvent>>;

    /// Mapping of the frame just presented. Sources that already report
    /// logical positions can ignore it.
    fn set_viewport(&mut self, _viewport: Viewport) {}
}

/// Terminal mouse and keyboard input
#[derive(Debug, Clone)]
pub struct TerminalInput {
    viewport: Viewport,
}

impl TerminalInput {
    pub fn new(logical: (i32, i32)) -> Self {
        Self {
            viewport: Viewport::new(logical, Rect::new(0, 0, 1, 1)),
        }
    }

    /// Translate one terminal event, dropping anything the menus ignore
    pub fn translate(&self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => {
                let pos = self.viewport.to_logical(column, row);
                match kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        Some(InputEvent::PointerMove(pos))
                    }
                    MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerClick(pos)),
                    _ => None,
                }
            }
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::Quit)
                }
                KeyCode::Char('q') => Some(InputEvent::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}

impl InputSource for TerminalInput {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn poll(&mut self, timeout: Duration) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        if !event::poll(timeout)? {
            return Ok(events);
        }
        // Drain everything already queued so one frame sees it all
        loop {
            if let Some(input) = self.translate(event::read()?) {
                events.push(input);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> TerminalInput {
        let mut input = TerminalInput::new((1000, 800));
        input.set_viewport(Viewport::new((1000, 800), Rect::new(0, 0, 100, 40)));
        input
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_mouse_move_maps_to_logical() {
        let event = input().translate(mouse(MouseEventKind::Moved, 50, 18));
        assert_eq!(event, Some(InputEvent::PointerMove(Point::new(505, 370))));
    }

    #[test]
    fn test_left_click_maps_to_click() {
        let event = input().translate(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(event, Some(InputEvent::PointerClick(Point::new(5, 10))));
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let input = input();
        assert_eq!(
            input.translate(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            None
        );
        assert_eq!(input.translate(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn test_quit_keys() {
        let input = input();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        let c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(input.translate(ctrl_c), Some(InputEvent::Quit));
        assert_eq!(input.translate(q), Some(InputEvent::Quit));
        assert_eq!(input.translate(c), None);
    }

    #[test]
    fn test_resize_is_ignored() {
        assert_eq!(input().translate(Event::Resize(80, 24)), None);
    }
}
