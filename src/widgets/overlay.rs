//! Message overlay and drop-shadowed text.
//!
//! Renders over whatever is already on the surface: the whole canvas is
//! dimmed with the palette's overlay tint and the message is centered on top
//! with a shadow, so the screen beneath stays visible.

use crate::geometry::Point;
use crate::platform::{Font, Surface};
use crate::screens::RenderContext;
use crate::styles::Rgb;

/// Logical offset of text shadows
pub const SHADOW_OFFSET: i32 = 3;

/// Text drawn twice: once in `shadow` offset down-right, then in `color`.
pub struct ShadowText<'a> {
    pub text: &'a str,
    pub font: &'a Font,
    pub color: Rgb,
    pub shadow: Rgb,
}

impl<'a> ShadowText<'a> {
    pub fn new(text: &'a str, font: &'a Font, color: Rgb) -> Self {
        Self {
            text,
            font,
            color,
            shadow: Rgb::BLACK,
        }
    }

    pub fn shadow(mut self, shadow: Rgb) -> Self {
        self.shadow = shadow;
        self
    }

    /// Draw centered on `center`
    pub fn render_centered(&self, surface: &mut Surface, center: Point) {
        surface.text_centered(
            center.offset(SHADOW_OFFSET, SHADOW_OFFSET),
            self.text,
            self.font,
            self.shadow,
        );
        surface.text_centered(center, self.text, self.font, self.color);
    }
}

/// Full-canvas dimming plus a centered, shadowed message.
pub struct MessageOverlay<'a> {
    message: &'a str,
}

impl<'a> MessageOverlay<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub fn render(&self, surface: &mut Surface, ctx: &RenderContext) {
        let palette = &ctx.config.palette;
        let canvas = surface.bounds();
        surface.tint(canvas, palette.overlay);
        ShadowText::new(self.message, &ctx.fonts.title, palette.accent)
            .render_centered(surface, canvas.center());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::platform::Fonts;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    #[test]
    fn test_overlay_dims_and_centers_message() {
        let config = Config::default();
        let fonts = Fonts::default();
        let ctx = RenderContext::new(&config, &fonts);

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 40));
        let mut surface = Surface::new(&mut buf, (1000, 800));
        surface.fill(Rgb(30, 30, 30));
        MessageOverlay::new("HELLO").render(&mut surface, &ctx);

        // (30 * 75 + 127) / 255
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(9, 9, 9));
        let text: String = (48..53).map(|x| buf[(x, 20)].symbol().to_string()).collect();
        assert_eq!(text, "HELLO");
        assert_eq!(buf[(48, 20)].fg, Color::Rgb(255, 204, 0));
    }

    #[test]
    fn test_shadow_text_draws_color_last() {
        let font = Font::system(24);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        let mut surface = Surface::new(&mut buf, (1000, 800));
        ShadowText::new("AB", &font, Rgb::WHITE)
            .shadow(Rgb(153, 32, 32))
            .render_centered(&mut surface, Point::new(500, 400));
        assert_eq!(buf[(4, 2)].symbol(), "A");
        assert_eq!(buf[(4, 2)].fg, Color::Rgb(255, 255, 255));
    }
}
