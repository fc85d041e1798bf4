//! Color palette for the menu shell.
//!
//! The palette is plain data owned by [`Config`](crate::config::Config) and
//! handed to every renderer through the render context. Colors are stored as
//! RGB triples so they round-trip through the TOML config unchanged.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An opaque RGB color. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Composite `over` onto `self` with `alpha` (0 = keep self, 255 = replace).
    pub fn blend(self, over: Rgb, alpha: u8) -> Rgb {
        let mix = |under: u8, top: u8| -> u8 {
            let a = u32::from(alpha);
            ((u32::from(under) * (255 - a) + u32::from(top) * a + 127) / 255) as u8
        };
        Rgb(mix(self.0, over.0), mix(self.1, over.1), mix(self.2, over.2))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// A translucent color. Serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub fn rgb(self) -> Rgb {
        Rgb(self.0, self.1, self.2)
    }

    pub fn alpha(self) -> u8 {
        self.3
    }
}

/// Colors used across the menu screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Button fill
    pub primary: Rgb,
    /// Button fill while the pointer is over it
    pub primary_hover: Rgb,
    /// Button border and drop shadows
    pub shadow: Rgb,
    /// Title and transient message text
    pub accent: Rgb,
    /// Button labels and tips
    pub text: Rgb,
    /// Body copy on the instructions screen
    pub body_text: Rgb,
    /// Footer line
    pub footer: Rgb,
    /// Container and overlay tint
    pub overlay: Rgba,
    /// Solid fill used when the background image is missing
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb(230, 57, 70),
            primary_hover: Rgb(255, 75, 92),
            shadow: Rgb(153, 32, 32),
            accent: Rgb(255, 204, 0),
            text: Rgb::WHITE,
            body_text: Rgb(200, 200, 200),
            footer: Rgb(220, 220, 220),
            overlay: Rgba(0, 0, 0, 180),
            background: Rgb(30, 30, 30),
        }
    }
}

impl Palette {
    /// Fill color for a button in the given hover state
    pub fn button_fill(&self, hovered: bool) -> Rgb {
        if hovered {
            self.primary_hover
        } else {
            self.primary
        }
    }
}
