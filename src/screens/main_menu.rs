//! Main menu screen.
//!
//! Background image (or a solid fill when it is missing), a translucent
//! container with the logo and the shadowed title, four buttons and a
//! copyright footer.

use super::screen_trait::{
    InputFrame, NavigationCommand, RenderContext, Screen, ScreenContext, ScreenKind,
};
use crate::geometry::{Bounds, Point};
use crate::platform::{Image, Surface};
use crate::widgets::{clear_hover, clicked_action, Button, ShadowText};
use tracing::info;

pub const TITLE: &str = "Super Voice Bros";

const CONTAINER_WIDTH: i32 = 800;
const CONTAINER_HEIGHT: i32 = 500;
const LOGO_WIDTH: i32 = 400;
const LOGO_HEIGHT: i32 = 200;
const LOGO_TOP: i32 = 20;
const TITLE_TOP: i32 = 150;
const FIRST_BUTTON_TOP: i32 = 200;
const BUTTON_SPACING: i32 = 60;
const FOOTER_FROM_BOTTOM: i32 = 30;

/// Main menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Characters,
    Settings,
    Credits,
}

impl MenuItem {
    pub fn all() -> [MenuItem; 4] {
        [
            MenuItem::Play,
            MenuItem::Characters,
            MenuItem::Settings,
            MenuItem::Credits,
        ]
    }

    pub fn text(&self) -> &'static str {
        match self {
            MenuItem::Play => "PLAY",
            MenuItem::Characters => "CHARACTERS",
            MenuItem::Settings => "SETTINGS",
            MenuItem::Credits => "CREDITS",
        }
    }

    /// Command produced when the item's button is clicked
    pub fn command(&self, ctx: &ScreenContext) -> NavigationCommand {
        let messages = &ctx.config.messages;
        let transient = |message: String| NavigationCommand::ShowTransient {
            message,
            duration: messages.duration(),
        };
        match self {
            MenuItem::Play => NavigationCommand::Push(ScreenKind::Instructions),
            MenuItem::Characters => transient("Check out the available characters!".to_string()),
            MenuItem::Settings => transient("Opening settings...".to_string()),
            MenuItem::Credits => transient(messages.credits_line(ctx.year)),
        }
    }
}

pub struct MainMenuScreen {
    background: Option<Image>,
    logo: Option<Image>,
    container: Bounds,
    buttons: Vec<Button>,
    footer: String,
}

impl MainMenuScreen {
    pub fn new(ctx: &ScreenContext) -> Self {
        let (width, height) = ctx.config.canvas();
        let container = Bounds::centered(width, height, CONTAINER_WIDTH, CONTAINER_HEIGHT);
        let buttons = MenuItem::all()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Button::centered(
                    item.text(),
                    width,
                    container.y + FIRST_BUTTON_TOP + BUTTON_SPACING * i as i32,
                    item.command(ctx),
                )
            })
            .collect();

        Self {
            background: ctx.assets.load_image(&ctx.config.assets.background),
            logo: ctx.assets.load_image(&ctx.config.assets.logo),
            container,
            buttons,
            footer: ctx.config.messages.credits_line(ctx.year),
        }
    }

    pub fn container(&self) -> Bounds {
        self.container
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Button for a menu item
    pub fn button(&self, item: MenuItem) -> &Button {
        &self.buttons[item as usize]
    }
}

impl Screen for MainMenuScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::MainMenu
    }

    fn handle_input(&mut self, input: &InputFrame) -> Option<NavigationCommand> {
        let command = clicked_action(&mut self.buttons, input)?;
        info!("Main menu selection: {:?}", command);
        Some(command)
    }

    fn render(&self, surface: &mut Surface, ctx: &RenderContext) {
        let palette = &ctx.config.palette;
        let canvas = surface.bounds();

        match &self.background {
            Some(image) => surface.blit_image(image, canvas),
            None => surface.fill(palette.background),
        }

        surface.tint(self.container, palette.overlay);

        if let Some(logo) = &self.logo {
            let area = Bounds::centered_x(
                canvas.width,
                self.container.y + LOGO_TOP,
                LOGO_WIDTH,
                LOGO_HEIGHT,
            );
            surface.blit_image(logo, area);
        }

        let title_font = &ctx.fonts.title;
        ShadowText::new(TITLE, title_font, palette.accent).render_centered(
            surface,
            Point::new(
                canvas.width / 2,
                self.container.y + TITLE_TOP + i32::from(title_font.size) / 2,
            ),
        );

        for button in &self.buttons {
            button.draw(surface, ctx);
        }

        let footer_font = &ctx.fonts.small;
        surface.text_centered(
            Point::new(
                canvas.width / 2,
                self.container.bottom() - FOOTER_FROM_BOTTOM + i32::from(footer_font.size) / 2,
            ),
            &self.footer,
            footer_font,
            palette.footer,
        );
    }

    fn on_enter(&mut self) {
        info!("Entered main menu");
    }

    fn on_exit(&mut self) {
        clear_hover(&mut self.buttons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::platform::{Fonts, FsAssets};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use std::time::Duration;
    use tempfile::TempDir;

    fn screen_in(dir: &TempDir) -> (Config, MainMenuScreen) {
        let config = Config::default();
        let assets = FsAssets::new(dir.path());
        let ctx = ScreenContext::new(&config, &assets, 2024);
        let screen = MainMenuScreen::new(&ctx);
        (config, screen)
    }

    #[test]
    fn test_button_layout() {
        let dir = TempDir::new().unwrap();
        let (_, screen) = screen_in(&dir);
        assert_eq!(screen.container(), Bounds::new(100, 150, 800, 500));
        let tops: Vec<i32> = screen.buttons().iter().map(|b| b.bounds().y).collect();
        assert_eq!(tops, vec![350, 410, 470, 530]);
        assert!(screen.buttons().iter().all(|b| b.bounds().x == 350));
    }

    #[test]
    fn test_button_commands() {
        let dir = TempDir::new().unwrap();
        let (_, screen) = screen_in(&dir);
        assert_eq!(
            screen.button(MenuItem::Play).action(),
            &NavigationCommand::Push(ScreenKind::Instructions)
        );
        assert_eq!(
            screen.button(MenuItem::Credits).action(),
            &NavigationCommand::ShowTransient {
                message: "© 2024 Marcos Gustavo - IFRN Caicó".to_string(),
                duration: Duration::from_millis(2000),
            }
        );
        assert!(matches!(
            screen.button(MenuItem::Settings).action(),
            NavigationCommand::ShowTransient { .. }
        ));
    }

    #[test]
    fn test_click_outside_buttons_does_nothing() {
        let dir = TempDir::new().unwrap();
        let (_, mut screen) = screen_in(&dir);
        assert_eq!(screen.handle_input(&InputFrame::click(Point::new(120, 160))), None);
    }

    #[test]
    fn test_hover_follows_pointer() {
        let dir = TempDir::new().unwrap();
        let (_, mut screen) = screen_in(&dir);
        let center = screen.button(MenuItem::Settings).bounds().center();
        assert_eq!(screen.handle_input(&InputFrame::idle(center)), None);
        assert!(screen.button(MenuItem::Settings).is_hovered());
        assert!(!screen.button(MenuItem::Play).is_hovered());
    }

    #[test]
    fn test_missing_background_renders_solid_fill() {
        let dir = TempDir::new().unwrap();
        let (config, screen) = screen_in(&dir);
        let fonts = Fonts::default();
        let ctx = RenderContext::new(&config, &fonts);

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 40));
        let mut surface = Surface::new(&mut buf, config.canvas());
        screen.render(&mut surface, &ctx);

        assert_eq!(buf[(0, 0)].bg, Color::Rgb(30, 30, 30));
        assert_eq!(buf[(99, 39)].bg, Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_background_image_is_drawn() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("fundo.jpg"), [0xFFu8, 0xD8, 0xFF, 0xE0]).unwrap();
        let (config, screen) = screen_in(&dir);
        let fonts = Fonts::default();
        let ctx = RenderContext::new(&config, &fonts);

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 40));
        let mut surface = Surface::new(&mut buf, config.canvas());
        screen.render(&mut surface, &ctx);

        assert_eq!(buf[(0, 0)].symbol(), "░");
    }

    #[test]
    fn test_render_shows_title_and_labels() {
        let dir = TempDir::new().unwrap();
        let (config, screen) = screen_in(&dir);
        let fonts = Fonts::default();
        let ctx = RenderContext::new(&config, &fonts);

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 40));
        let mut surface = Surface::new(&mut buf, config.canvas());
        screen.render(&mut surface, &ctx);

        let rows: Vec<String> = (0..40)
            .map(|y| (0..100).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect();
        assert!(rows.iter().any(|r| r.contains(TITLE)));
        for item in MenuItem::all() {
            assert!(rows.iter().any(|r| r.contains(item.text())), "{}", item.text());
        }
        assert!(rows.iter().any(|r| r.contains("© 2024")));
    }
}
