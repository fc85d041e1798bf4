//! Screen trait and associated types.
//!
//! Screens own their state and buttons, read input through an [`InputFrame`],
//! and signal navigation by returning a [`NavigationCommand`] instead of
//! touching the navigator directly.

use crate::config::Config;
use crate::geometry::Point;
use crate::platform::{AssetLoader, Fonts, Surface};
use std::fmt;
use std::time::Duration;

/// Identity of a navigable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    MainMenu,
    Instructions,
    TransientMessage,
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenKind::MainMenu => "main menu",
            ScreenKind::Instructions => "instructions",
            ScreenKind::TransientMessage => "transient message",
        };
        f.write_str(name)
    }
}

/// What a screen asks the navigator to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Build a screen and put it on top of the stack.
    Push(ScreenKind),
    /// Drop the top screen.
    Pop,
    /// Show a message overlay that blocks input for `duration`, then pops itself.
    ShowTransient { message: String, duration: Duration },
    /// Tear everything down.
    Quit,
}

/// Pointer state for one frame, derived from that frame's input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFrame {
    /// Where the pointer is (the click position when a click happened)
    pub pointer: Point,
    /// Whether the primary button was pressed this frame
    pub clicked: bool,
}

impl InputFrame {
    pub fn idle(pointer: Point) -> Self {
        Self {
            pointer,
            clicked: false,
        }
    }

    pub fn click(pointer: Point) -> Self {
        Self {
            pointer,
            clicked: true,
        }
    }
}

/// Context for building screens and handling their input.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Asset loader for images and text.
    pub assets: &'a dyn AssetLoader,
    /// Calendar year shown in the footer and credits.
    pub year: i32,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, assets: &'a dyn AssetLoader, year: i32) -> Self {
        Self {
            config,
            assets,
            year,
        }
    }
}

/// Read-only resources for rendering.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Fonts resolved at startup.
    pub fonts: &'a Fonts,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, fonts: &'a Fonts) -> Self {
        Self { config, fonts }
    }
}

/// A navigable full-frame UI state.
///
/// The navigator calls, once per frame and only on the top screen:
/// [`tick`](Screen::tick), then [`handle_input`](Screen::handle_input) if the
/// tick produced nothing. Every visible screen is then asked to
/// [`render`](Screen::render), bottom first.
pub trait Screen {
    fn kind(&self) -> ScreenKind;

    /// React to this frame's pointer state.
    fn handle_input(&mut self, input: &InputFrame) -> Option<NavigationCommand>;

    /// Draw onto the surface. Must not fail; missing assets were already
    /// replaced by their fallbacks when the screen was built.
    fn render(&self, surface: &mut Surface, ctx: &RenderContext);

    /// Advance timers by the wall-clock time since the previous frame.
    fn tick(&mut self, _elapsed: Duration) -> Option<NavigationCommand> {
        None
    }

    /// Overlays are drawn on top of the screen beneath them.
    fn is_overlay(&self) -> bool {
        false
    }

    /// Called when the screen becomes the top of the stack.
    fn on_enter(&mut self) {}

    /// Called when the screen stops being the top of the stack.
    fn on_exit(&mut self) {}
}
