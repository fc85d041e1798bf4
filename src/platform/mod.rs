//! Platform collaborators: draw surface, assets, audio and input.
//!
//! The screens only ever call into these interfaces; nothing here knows
//! about screens or navigation.

pub mod assets;
pub mod audio;
pub mod input;
pub mod surface;

pub use assets::{AssetLoader, Font, FontFace, Fonts, FsAssets, Image, ImageContent};
pub use audio::{open_audio, Audio, SilentAudio};
pub use input::{InputEvent, InputSource, TerminalInput};
pub use surface::{Surface, Viewport};
