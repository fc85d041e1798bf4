// Reusable UI widgets

pub mod button;
pub mod markup;
pub mod overlay;

pub use button::{clear_hover, clicked_action, Button, BUTTON_HEIGHT, BUTTON_WIDTH};
pub use markup::{LineKind, MarkupLine};
pub use overlay::{MessageOverlay, ShadowText};
