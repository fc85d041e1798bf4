//! How-to-play screen: static text with light markup and a Back button.

use super::screen_trait::{
    InputFrame, NavigationCommand, RenderContext, Screen, ScreenContext, ScreenKind,
};
use crate::geometry::{Bounds, Point};
use crate::platform::Surface;
use crate::widgets::{clear_hover, clicked_action, markup, Button, LineKind, ShadowText};
use indoc::indoc;
use tracing::{debug, info};

pub const HEADING: &str = "HOW TO PLAY";

/// Built-in text, replaced by `assets.instructions` when that file loads
pub const DEFAULT_INSTRUCTIONS: &str = indoc! {"
    Goal:
    Guide the hero through each level using only your voice.

    Voice commands:
    - Say \"jump\" to leap over gaps and enemies
    - Say \"run\" to speed up
    - Say \"stop\" to stand still

    Tips:
    • Speak clearly and close to the microphone
    • Short commands are recognized faster
"};

const CONTAINER_WIDTH: i32 = 800;
const CONTAINER_HEIGHT: i32 = 500;
const HEADING_TOP: i32 = 40;
const TEXT_TOP: i32 = 90;
const TEXT_INDENT: i32 = 40;
const TIP_INDENT: i32 = 60;
const BACK_FROM_BOTTOM: i32 = 80;
const BACK_GAP: i32 = 10;

pub struct InstructionsScreen {
    text: String,
    container: Bounds,
    buttons: Vec<Button>,
}

impl InstructionsScreen {
    pub fn new(ctx: &ScreenContext) -> Self {
        let (width, height) = ctx.config.canvas();
        let container = Bounds::centered(width, height, CONTAINER_WIDTH, CONTAINER_HEIGHT);
        let back = Button::centered(
            "BACK",
            width,
            container.bottom() - BACK_FROM_BOTTOM,
            NavigationCommand::Pop,
        );

        let text = ctx
            .config
            .assets
            .instructions
            .as_deref()
            .and_then(|path| ctx.assets.load_text(path))
            .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string());

        Self {
            text,
            container,
            buttons: vec![back],
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn back_button(&self) -> &Button {
        &self.buttons[0]
    }
}

impl Screen for InstructionsScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Instructions
    }

    fn handle_input(&mut self, input: &InputFrame) -> Option<NavigationCommand> {
        clicked_action(&mut self.buttons, input)
    }

    fn render(&self, surface: &mut Surface, ctx: &RenderContext) {
        let palette = &ctx.config.palette;
        let fonts = ctx.fonts;
        let canvas = surface.bounds();

        surface.fill(palette.background);
        surface.tint(self.container, palette.overlay);

        ShadowText::new(HEADING, &fonts.title, palette.accent).render_centered(
            surface,
            Point::new(
                canvas.width / 2,
                self.container.y + HEADING_TOP + i32::from(fonts.title.size) / 2,
            ),
        );

        // Never step less than one terminal row, or lines would overwrite each other
        let step = fonts
            .body
            .line_height()
            .max(surface.viewport().cell_height());
        let limit = self.back_button().bounds().y - BACK_GAP;
        let mut y = self.container.y + TEXT_TOP;

        for line in markup::parse(&self.text) {
            if line.kind == LineKind::Blank {
                y += step / 2;
                continue;
            }
            if y + step > limit {
                debug!("Instructions text truncated at {:?}", line.text);
                break;
            }
            let x = self.container.x;
            match line.kind {
                LineKind::Header => {
                    surface.text(
                        Point::new(x + TEXT_INDENT, y),
                        line.text,
                        &fonts.header,
                        palette.accent,
                    );
                }
                LineKind::Tip => {
                    let tip = format!("• {}", line.text);
                    surface.text(Point::new(x + TIP_INDENT, y), &tip, &fonts.body, palette.text);
                }
                LineKind::Body => {
                    surface.text(
                        Point::new(x + TEXT_INDENT, y),
                        line.text,
                        &fonts.body,
                        palette.body_text,
                    );
                }
                LineKind::Blank => {}
            }
            y += step;
        }

        for button in &self.buttons {
            button.draw(surface, ctx);
        }
    }

    fn on_enter(&mut self) {
        info!("Showing instructions");
    }

    fn on_exit(&mut self) {
        clear_hover(&mut self.buttons);
    }
}
