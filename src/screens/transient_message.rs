//! Timed message overlay.
//!
//! Shown over the screen that pushed it. Pointer input is swallowed until
//! the timer runs out, then the screen pops itself.

use super::screen_trait::{InputFrame, NavigationCommand, RenderContext, Screen, ScreenKind};
use crate::platform::Surface;
use crate::widgets::MessageOverlay;
use std::time::Duration;
use tracing::debug;

pub struct TransientMessageScreen {
    message: String,
    duration: Duration,
    remaining: Duration,
}

impl TransientMessageScreen {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
            remaining: duration,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

impl Screen for TransientMessageScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::TransientMessage
    }

    fn handle_input(&mut self, _input: &InputFrame) -> Option<NavigationCommand> {
        None
    }

    fn render(&self, surface: &mut Surface, ctx: &RenderContext) {
        MessageOverlay::new(&self.message).render(surface, ctx);
    }

    fn tick(&mut self, elapsed: Duration) -> Option<NavigationCommand> {
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            debug!("Transient message expired: {:?}", self.message);
            Some(NavigationCommand::Pop)
        } else {
            None
        }
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn on_enter(&mut self) {
        debug!(
            "Showing transient message {:?} for {:?}",
            self.message, self.duration
        );
    }
}
