//! Clickable, hoverable button.

use crate::geometry::{Bounds, Point};
use crate::platform::Surface;
use crate::screens::{InputFrame, NavigationCommand, RenderContext};

/// Default button size on the logical canvas
pub const BUTTON_WIDTH: i32 = 300;
pub const BUTTON_HEIGHT: i32 = 50;

/// A rectangular control that produces a navigation command when clicked.
///
/// Geometry is fixed at construction. The hover flag is recomputed from the
/// pointer on every [`update`](Button::update) and never carried over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    bounds: Bounds,
    hovered: bool,
    action: NavigationCommand,
}

impl Button {
    pub fn new(label: impl Into<String>, bounds: Bounds, action: NavigationCommand) -> Self {
        Self {
            label: label.into(),
            bounds,
            hovered: false,
            action,
        }
    }

    /// Default-sized button centered horizontally on the canvas
    pub fn centered(
        label: impl Into<String>,
        canvas_width: i32,
        y: i32,
        action: NavigationCommand,
    ) -> Self {
        Self::new(
            label,
            Bounds::centered_x(canvas_width, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            action,
        )
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn action(&self) -> &NavigationCommand {
        &self.action
    }

    /// Recompute hover from `pointer`; true iff hovered and clicked this frame.
    pub fn update(&mut self, pointer: Point, clicked: bool) -> bool {
        self.hovered = self.bounds.contains(pointer);
        self.hovered && clicked
    }

    pub fn draw(&self, surface: &mut Surface, ctx: &RenderContext) {
        let palette = &ctx.config.palette;
        surface.rounded_rect(self.bounds, palette.button_fill(self.hovered), palette.shadow);
        surface.text_centered(
            self.bounds.center(),
            &self.label,
            &ctx.fonts.button,
            palette.text,
        );
    }
}

/// Drop hover from every button once their screen stops receiving input.
pub fn clear_hover(buttons: &mut [Button]) {
    for button in buttons.iter_mut() {
        button.hovered = false;
    }
}

/// Update every button and return the action of the one clicked, if any.
///
/// All buttons are updated even after a hit so every hover flag reflects
/// this frame.
pub fn clicked_action(buttons: &mut [Button], input: &InputFrame) -> Option<NavigationCommand> {
    let mut action = None;
    for button in buttons.iter_mut() {
        if button.update(input.pointer, input.clicked) && action.is_none() {
            action = Some(button.action.clone());
        }
    }
    action
}
