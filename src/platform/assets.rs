//! Image, font and text asset loading.
//!
//! A missing or unreadable asset is never an error: image and text loads
//! return `None`, font loads fall back to the system font, and each miss is
//! logged once at the point of loading.

use crate::config::Config;
use crate::styles::Rgb;
use crate::utils::expand_path;
use ratatui::style::{Modifier, Style};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Family used when a font file cannot be loaded
pub const SYSTEM_FONT: &str = "arial";

/// How many bytes of a raster file are sampled to pick its tone
const TONE_SAMPLE: usize = 4096;

/// Where a font comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontFace {
    /// Loaded from a font file
    File(PathBuf),
    /// Built-in system font
    System(String),
}

/// A font handle. The terminal renders every face in the cell font, so the
/// size only drives layout and `bold` maps to the bold modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub face: FontFace,
    pub size: u16,
    pub bold: bool,
}

impl Font {
    pub fn system(size: u16) -> Self {
        Self {
            face: FontFace::System(SYSTEM_FONT.to_string()),
            size,
            bold: false,
        }
    }

    pub fn from_file(path: impl Into<PathBuf>, size: u16) -> Self {
        Self {
            face: FontFace::File(path.into()),
            size,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.face, FontFace::System(_))
    }

    /// Logical distance between two lines of text in this font
    pub fn line_height(&self) -> i32 {
        i32::from(self.size) + i32::from(self.size) / 2
    }

    /// Terminal style for text in this font
    pub fn style(&self, color: Rgb) -> Style {
        let style = Style::default().fg(color.into());
        if self.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// Decoded image data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageContent {
    /// Text file drawn as character art, one line per row
    Art(Vec<String>),
    /// Binary image shown as a shaded block in its average tone
    Raster { tone: Rgb },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub path: PathBuf,
    pub content: ImageContent,
}

impl Image {
    /// Interpret raw file bytes; `None` for an empty file
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let content = match std::str::from_utf8(bytes) {
            Ok(text) => ImageContent::Art(text.lines().map(str::to_string).collect()),
            Err(_) => {
                let sample = &bytes[..bytes.len().min(TONE_SAMPLE)];
                let sum: u64 = sample.iter().map(|b| u64::from(*b)).sum();
                let level = (sum / sample.len() as u64) as u8;
                ImageContent::Raster {
                    tone: Rgb(level / 2, level / 2, level / 2),
                }
            }
        };
        Some(Self {
            path: path.into(),
            content,
        })
    }
}

/// Asset collaborator consumed by the screens
pub trait AssetLoader {
    /// Where a configured asset path lives on disk
    fn resolve(&self, path: &Path) -> PathBuf;

    /// Load an image, or `None` if it is missing or unreadable
    fn load_image(&self, path: &Path) -> Option<Image>;

    /// Load a font, falling back to the system font
    fn load_font(&self, path: &Path, size: u16) -> Font;

    /// Load a UTF-8 text file, or `None` if it is missing or unreadable
    fn load_text(&self, path: &Path) -> Option<String>;
}

/// Loads assets from a directory on disk
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: expand_path(root.as_ref()),
        }
    }

    fn read(&self, kind: &str, path: &Path) -> Option<Vec<u8>> {
        let full = self.resolve(path);
        match std::fs::read(&full) {
            Ok(bytes) if !bytes.is_empty() => {
                debug!("Loaded {} asset {:?}", kind, full);
                Some(bytes)
            }
            Ok(_) => {
                warn!("Missing {} asset {:?}: file is empty", kind, full);
                None
            }
            Err(e) => {
                warn!("Missing {} asset {:?}: {}", kind, full, e);
                None
            }
        }
    }
}

impl AssetLoader for FsAssets {
    /// Absolute paths are used as-is, relative ones live under the root
    fn resolve(&self, path: &Path) -> PathBuf {
        let path = expand_path(path);
        if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        }
    }

    fn load_image(&self, path: &Path) -> Option<Image> {
        let bytes = self.read("image", path)?;
        Image::from_bytes(self.resolve(path), &bytes)
    }

    fn load_font(&self, path: &Path, size: u16) -> Font {
        match self.read("font", path) {
            Some(_) => Font::from_file(self.resolve(path), size),
            None => Font::system(size),
        }
    }

    fn load_text(&self, path: &Path) -> Option<String> {
        let bytes = self.read("text", path)?;
        match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Text asset {:?} is not UTF-8: {}", self.resolve(path), e);
                None
            }
        }
    }
}

/// The fonts every screen draws with, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fonts {
    /// Title and transient messages
    pub title: Font,
    /// Button labels
    pub button: Font,
    /// Section headers
    pub header: Font,
    /// Instructions body copy
    pub body: Font,
    /// Footer
    pub small: Font,
}

impl Fonts {
    pub fn load(assets: &dyn AssetLoader, config: &Config) -> Self {
        let mut title = assets.load_font(&config.assets.title_font, 24);
        if title.is_fallback() {
            title = title.bold();
        }
        Self {
            title,
            button: Font::system(20).bold(),
            header: Font::system(18).bold(),
            body: Font::system(16),
            small: Font::system(14),
        }
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            title: Font::system(24).bold(),
            button: Font::system(20).bold(),
            header: Font::system(18).bold(),
            body: Font::system(16),
            small: Font::system(14),
        }
    }
}
