//! Shared test utilities for navigation workflow tests.
//!
//! Provides `TestEnv` - an isolated asset directory plus config, with
//! automatic cleanup via `TempDir`, and `TestApp` - an `App` wired to a
//! recording audio backend that can be driven frame by frame.

#![allow(dead_code)]

use anyhow::{Context, Result};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;

use voicebros::geometry::{Bounds, Point};
use voicebros::platform::{Audio, FsAssets, InputEvent, Surface};
use voicebros::screens::MenuItem;
use voicebros::{App, Config, Flow, ScreenKind};

/// Year every test app is pinned to
pub const YEAR: i32 = 2024;

/// One frame at 60 fps
pub const FRAME: Duration = Duration::from_millis(16);

/// Builder for [`TestEnv`].
pub struct TestEnvBuilder {
    files: Vec<(PathBuf, Vec<u8>)>,
    config: Config,
}

impl TestEnvBuilder {
    /// Put a file into the asset directory
    pub fn with_asset(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((PathBuf::from(name), content.into()));
        self
    }

    /// Adjust the config before the app is built
    pub fn with_config(mut self, f: impl FnOnce(&mut Config)) -> Self {
        f(&mut self.config);
        self
    }

    pub fn build(self) -> Result<TestEnv> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let assets_dir = temp_dir.path().join("assets");
        fs::create_dir_all(&assets_dir)?;

        for (name, content) in &self.files {
            fs::write(assets_dir.join(name), content)
                .with_context(|| format!("Failed to write asset {:?}", name))?;
        }

        let mut config = self.config;
        config.assets.dir = assets_dir.clone();

        Ok(TestEnv {
            temp_dir,
            assets_dir,
            config,
        })
    }
}

/// An isolated asset directory and the config pointing at it.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub assets_dir: PathBuf,
    pub config: Config,
}

impl TestEnv {
    pub fn new() -> TestEnvBuilder {
        TestEnvBuilder {
            files: Vec::new(),
            config: Config::default(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    /// Build an app over this environment
    pub fn app(&self) -> TestApp {
        let audio = RecordingAudio::default();
        let log = audio.log.clone();
        let app = App::with_year(
            self.config.clone(),
            Box::new(FsAssets::new(&self.assets_dir)),
            Box::new(audio),
            YEAR,
        );
        TestApp { app, audio: log }
    }
}

/// Everything the app asked the audio backend to do
#[derive(Debug, Default)]
pub struct AudioLog {
    pub played: Vec<(PathBuf, f32)>,
    pub stops: usize,
}

#[derive(Default)]
pub struct RecordingAudio {
    log: Rc<RefCell<AudioLog>>,
}

impl Audio for RecordingAudio {
    fn play_looping(&mut self, path: &Path, volume: f32) {
        self.log
            .borrow_mut()
            .played
            .push((path.to_path_buf(), volume));
    }

    fn stop(&mut self) {
        self.log.borrow_mut().stops += 1;
    }

    fn is_playing(&self) -> bool {
        let log = self.log.borrow();
        log.played.len() > log.stops
    }
}

/// An app driven by synthetic frames.
pub struct TestApp {
    pub app: App,
    pub audio: Rc<RefCell<AudioLog>>,
}

impl TestApp {
    pub fn stack(&self) -> Vec<ScreenKind> {
        self.app.navigator().kinds()
    }

    pub fn frame(&mut self, events: &[InputEvent]) -> Flow {
        self.app.step(events, FRAME)
    }

    pub fn click(&mut self, at: Point) -> Flow {
        self.frame(&[InputEvent::PointerClick(at)])
    }

    /// Run empty frames for `total` of wall-clock time
    pub fn wait(&mut self, total: Duration) -> Flow {
        let mut waited = Duration::ZERO;
        while waited < total {
            let step = FRAME.min(total - waited);
            if self.app.step(&[], step) == Flow::Exit {
                return Flow::Exit;
            }
            waited += step;
        }
        Flow::Running
    }

    /// Render one frame into a terminal of the given size, one string per row
    pub fn screen_text(&self, width: u16, height: u16) -> Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(|frame| {
            let mut surface = Surface::new(frame.buffer_mut(), self.app.config().canvas());
            self.app.render(&mut surface);
        })?;
        let buffer = terminal.backend().buffer();
        Ok((0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect())
    }
}

/// Center of a main menu button on the default 1000x800 canvas
pub fn menu_button(item: MenuItem) -> Point {
    let container = Bounds::centered(1000, 800, 800, 500);
    Bounds::centered_x(1000, container.y + 200 + 60 * item as i32, 300, 50).center()
}

/// Center of the instructions Back button on the default canvas
pub fn back_button() -> Point {
    let container = Bounds::centered(1000, 800, 800, 500);
    Bounds::centered_x(1000, container.bottom() - 80, 300, 50).center()
}
