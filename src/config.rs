use crate::styles::Palette;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
///
/// Built once at startup and passed by reference to every component that
/// needs it. Every section falls back to its defaults, so a partial file
/// still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas size, title and frame rate
    pub window: WindowConfig,
    /// Colors used by the menu screens
    pub palette: Palette,
    /// Asset file locations
    pub assets: AssetConfig,
    /// Transient message and credits text
    pub messages: MessageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Logical canvas width
    pub width: u16,
    /// Logical canvas height
    pub height: u16,
    /// Terminal title
    pub title: String,
    /// Target frames per second
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "Super Voice Bros | Voice-controlled adventure".to_string(),
            fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory relative asset paths are resolved against
    pub dir: PathBuf,
    /// Main menu background image
    pub background: PathBuf,
    /// Logo drawn at the top of the menu container
    pub logo: PathBuf,
    /// Font used for the title and transient messages
    pub title_font: PathBuf,
    /// Background music, looped while the menu runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<PathBuf>,
    /// Music volume (0.0 to 1.0)
    pub music_volume: f32,
    /// Text file replacing the built-in instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            background: PathBuf::from("fundo.jpg"),
            logo: PathBuf::from("logo00.png"),
            title_font: PathBuf::from("PressStart2P.ttf"),
            music: None,
            music_volume: 0.5,
            instructions: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// How long a transient message blocks input, in milliseconds
    pub duration_ms: u64,
    /// Name shown after the year in the footer and credits
    pub credits_holder: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            credits_holder: "Marcos Gustavo - IFRN Caicó".to_string(),
        }
    }
}

impl MessageConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Copyright line used by the footer and the credits message
    pub fn credits_line(&self, year: i32) -> String {
        format!("© {} {}", year, self.credits_holder)
    }
}

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config.normalized())
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Clamp out-of-range values instead of rejecting the file
    pub fn normalized(mut self) -> Self {
        self.window.fps = self.window.fps.clamp(MIN_FPS, MAX_FPS);
        self.window.width = self.window.width.max(1);
        self.window.height = self.window.height.max(1);
        self.assets.music_volume = if self.assets.music_volume.is_finite() {
            self.assets.music_volume.clamp(0.0, 1.0)
        } else {
            AssetConfig::default().music_volume
        };
        self
    }

    /// Logical canvas size as `(width, height)`
    pub fn canvas(&self) -> (i32, i32) {
        (i32::from(self.window.width), i32::from(self.window.height))
    }

    /// Time budget of a single frame at the configured frame rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.window.fps.max(MIN_FPS)
    }
}
