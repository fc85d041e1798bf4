use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Menu shell for Super Voice Bros, a voice-controlled platformer
#[derive(Parser, Debug, Default)]
#[command(
    name = "voicebros",
    version,
    about = "Menu shell for Super Voice Bros",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Frame rate override
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Asset directory override
    #[arg(short, long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Run without music
    #[arg(short, long)]
    pub mute: bool,
}

impl Cli {
    /// Config file path, explicit or default
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Layer command line overrides on top of the loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(fps) = self.fps {
            config.window.fps = fps;
        }
        if let Some(dir) = &self.assets {
            config.assets.dir = dir.clone();
        }
        config.normalized()
    }
}
