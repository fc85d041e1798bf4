//! Screen controllers for the menu shell.
//!
//! Each screen implements the `Screen` trait, owns its buttons and state, and
//! answers input with an optional `NavigationCommand`. The navigator keeps the
//! screens on a stack and applies those commands.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Navigator                        │    │
//! │  │  stack: [MainMenu, Instructions, ...]          │    │
//! │  │  top.tick(elapsed) / top.handle_input(frame)   │    │
//! │  │    -> Push | Pop | ShowTransient | Quit        │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - handle_input(frame) -> Option<Command>      │    │
//! │  │  - render(surface, context)                    │    │
//! │  │  - tick(elapsed) / is_overlay()                │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::screens::{InputFrame, NavigationCommand, RenderContext, Screen, ScreenKind};
//!
//! struct MyScreen {
//!     buttons: Vec<Button>,
//! }
//!
//! impl Screen for MyScreen {
//!     fn kind(&self) -> ScreenKind {
//!         ScreenKind::Instructions
//!     }
//!
//!     fn handle_input(&mut self, input: &InputFrame) -> Option<NavigationCommand> {
//!         clicked_action(&mut self.buttons, input)
//!     }
//!
//!     fn render(&self, surface: &mut Surface, ctx: &RenderContext) {
//!         surface.fill(ctx.config.palette.background);
//!     }
//! }
//! ```

pub mod instructions;
pub mod main_menu;
pub mod screen_trait;
pub mod transient_message;

pub use instructions::InstructionsScreen;
pub use main_menu::{MainMenuScreen, MenuItem};
pub use screen_trait::{
    InputFrame, NavigationCommand, RenderContext, Screen, ScreenContext, ScreenKind,
};
pub use transient_message::TransientMessageScreen;

/// Build a fresh screen for `kind`.
///
/// Transient messages carry their text and duration, so they are built from
/// [`NavigationCommand::ShowTransient`] instead; `None` is returned for them.
pub fn build_screen(kind: ScreenKind, ctx: &ScreenContext) -> Option<Box<dyn Screen>> {
    match kind {
        ScreenKind::MainMenu => Some(Box::new(MainMenuScreen::new(ctx))),
        ScreenKind::Instructions => Some(Box::new(InstructionsScreen::new(ctx))),
        ScreenKind::TransientMessage => None,
    }
}
