//! Screen stack and navigation.
//!
//! The navigator owns every live screen. Only the top screen receives ticks
//! and input; the commands it returns are applied here, so screens never
//! reach into the stack themselves.

use crate::geometry::Point;
use crate::platform::{InputEvent, Surface};
use crate::screens::{
    build_screen, InputFrame, NavigationCommand, RenderContext, Screen, ScreenContext, ScreenKind,
    TransientMessageScreen,
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Whether the app loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Running,
    Exit,
}

struct Entry {
    screen: Box<dyn Screen>,
    active: bool,
}

pub struct Navigator {
    stack: Vec<Entry>,
    pointer: Point,
}

impl Navigator {
    /// Start with the main menu on an otherwise empty stack
    pub fn new(ctx: &ScreenContext) -> Self {
        let mut navigator = Self {
            stack: Vec::new(),
            pointer: Point::offscreen(),
        };
        navigator.apply(NavigationCommand::Push(ScreenKind::MainMenu), ctx);
        navigator
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Screen kinds from bottom to top
    pub fn kinds(&self) -> Vec<ScreenKind> {
        self.stack.iter().map(|e| e.screen.kind()).collect()
    }

    /// Kind of the screen currently receiving input
    pub fn active_kind(&self) -> Option<ScreenKind> {
        self.stack
            .iter()
            .find(|e| e.active)
            .map(|e| e.screen.kind())
    }

    pub fn active_count(&self) -> usize {
        self.stack.iter().filter(|e| e.active).count()
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Run one frame: quit check, timers, then input on the top screen.
    pub fn frame(
        &mut self,
        events: &[InputEvent],
        elapsed: Duration,
        ctx: &ScreenContext,
    ) -> Flow {
        if events.contains(&InputEvent::Quit) {
            return self.apply(NavigationCommand::Quit, ctx);
        }

        let mut click = None;
        for event in events {
            match *event {
                InputEvent::PointerMove(p) => self.pointer = p,
                InputEvent::PointerClick(p) => {
                    self.pointer = p;
                    click.get_or_insert(p);
                }
                InputEvent::Quit => {}
            }
        }
        let input = match click {
            Some(p) => InputFrame::click(p),
            None => InputFrame::idle(self.pointer),
        };

        let Some(top) = self.stack.last_mut() else {
            return Flow::Exit;
        };
        let command = match top.screen.tick(elapsed) {
            Some(command) => Some(command),
            None => top.screen.handle_input(&input),
        };

        match command {
            Some(command) => self.apply(command, ctx),
            None => Flow::Running,
        }
    }

    /// Apply a navigation command to the stack
    pub fn apply(&mut self, command: NavigationCommand, ctx: &ScreenContext) -> Flow {
        match command {
            NavigationCommand::Push(kind) => match build_screen(kind, ctx) {
                Some(screen) => self.push(screen),
                None => warn!("Cannot push {} without a message, ignoring", kind),
            },
            NavigationCommand::ShowTransient { message, duration } => {
                self.push(Box::new(TransientMessageScreen::new(message, duration)));
            }
            NavigationCommand::Pop => self.pop(),
            NavigationCommand::Quit => {
                info!("Quit requested with {} screen(s) open", self.stack.len());
                while let Some(mut entry) = self.stack.pop() {
                    if entry.active {
                        entry.screen.on_exit();
                    }
                }
            }
        }

        if self.stack.is_empty() {
            Flow::Exit
        } else {
            Flow::Running
        }
    }

    fn push(&mut self, mut screen: Box<dyn Screen>) {
        if let Some(previous) = self.stack.last_mut() {
            previous.active = false;
            previous.screen.on_exit();
        }
        debug!("Push {} (depth {})", screen.kind(), self.stack.len() + 1);
        screen.on_enter();
        self.stack.push(Entry {
            screen,
            active: true,
        });
    }

    fn pop(&mut self) {
        let Some(mut entry) = self.stack.pop() else {
            return;
        };
        entry.screen.on_exit();
        debug!("Pop {} (depth {})", entry.screen.kind(), self.stack.len());
        if let Some(below) = self.stack.last_mut() {
            below.active = true;
            below.screen.on_enter();
            // Hover follows where the pointer is now, not where it was at the push
            let _ = below.screen.handle_input(&InputFrame::idle(self.pointer));
        }
    }

    /// Draw the visible screens, bottom first.
    ///
    /// Overlays on top of the stack show the nearest opaque screen beneath
    /// them; anything under that is hidden.
    pub fn render(&self, surface: &mut Surface, ctx: &RenderContext) {
        let start = self
            .stack
            .iter()
            .rposition(|e| !e.screen.is_overlay())
            .unwrap_or(0);
        for entry in &self.stack[start..] {
            entry.screen.render(surface, ctx);
        }
    }
}
