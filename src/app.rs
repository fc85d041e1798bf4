use crate::config::Config;
use crate::navigator::{Flow, Navigator};
use crate::platform::{AssetLoader, Audio, Fonts, InputEvent, InputSource, Surface, Viewport};
use crate::screens::{RenderContext, ScreenContext};
use crate::tui::draw_frame;
use anyhow::Result;
use chrono::Datelike;
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Main application state
pub struct App {
    config: Config,
    fonts: Fonts,
    assets: Box<dyn AssetLoader>,
    audio: Box<dyn Audio>,
    navigator: Navigator,
    /// Year shown in the footer and credits
    year: i32,
}

impl App {
    pub fn new(config: Config, assets: Box<dyn AssetLoader>, audio: Box<dyn Audio>) -> Self {
        let year = chrono::Local::now().year();
        Self::with_year(config, assets, audio, year)
    }

    pub fn with_year(
        config: Config,
        assets: Box<dyn AssetLoader>,
        audio: Box<dyn Audio>,
        year: i32,
    ) -> Self {
        let fonts = Fonts::load(assets.as_ref(), &config);
        let navigator = Navigator::new(&ScreenContext::new(&config, assets.as_ref(), year));
        Self {
            config,
            fonts,
            assets,
            audio,
            navigator,
            year,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn audio(&self) -> &dyn Audio {
        self.audio.as_ref()
    }

    /// Start background music, if any is configured
    pub fn start(&mut self) {
        if let Some(music) = &self.config.assets.music {
            let path = self.assets.resolve(music);
            info!("Starting music {:?}", path);
            self.audio.play_looping(&path, self.config.assets.music_volume);
        }
    }

    /// Advance one frame with the input gathered since the last one
    pub fn step(&mut self, events: &[InputEvent], elapsed: Duration) -> Flow {
        let ctx = ScreenContext::new(&self.config, self.assets.as_ref(), self.year);
        self.navigator.frame(events, elapsed, &ctx)
    }

    /// Render the visible screens onto `surface`
    pub fn render(&self, surface: &mut Surface) {
        let ctx = RenderContext::new(&self.config, &self.fonts);
        self.navigator.render(surface, &ctx);
    }

    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<Viewport> {
        draw_frame(terminal, self.config.canvas(), |surface| self.render(surface))
    }

    /// Start, run frames until the screen stack is empty, then shut down.
    ///
    /// Audio is stopped whether the loop ends normally or with an error.
    pub fn run<B, I>(&mut self, terminal: &mut Terminal<B>, input: &mut I) -> Result<()>
    where
        B: Backend,
        I: InputSource,
    {
        self.start();
        let result = self.frame_loop(terminal, input);
        if let Err(e) = &result {
            warn!("Frame loop failed: {:#}", e);
        }
        self.shutdown();
        result
    }

    fn frame_loop<B, I>(&mut self, terminal: &mut Terminal<B>, input: &mut I) -> Result<()>
    where
        B: Backend,
        I: InputSource,
    {
        let interval = self.config.frame_interval();

        input.set_viewport(self.draw(terminal)?);
        let mut last_frame = Instant::now();

        loop {
            let budget = interval.saturating_sub(last_frame.elapsed());
            let events = input.poll(budget)?;

            let now = Instant::now();
            let elapsed = now.duration_since(last_frame);
            last_frame = now;

            if self.step(&events, elapsed) == Flow::Exit {
                debug!("Screen stack empty, leaving frame loop");
                return Ok(());
            }
            input.set_viewport(self.draw(terminal)?);
        }
    }

    /// Stop audio. The terminal is restored by the caller.
    pub fn shutdown(&mut self) {
        self.audio.stop();
        info!("Shut down");
    }
}
