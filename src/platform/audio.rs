//! Background music.
//!
//! Playback failures are logged and otherwise ignored: the menu runs the same
//! with or without sound.

use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(feature = "sound")]
use anyhow::Result;
#[cfg(feature = "sound")]
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
#[cfg(feature = "sound")]
use std::fs::File;
#[cfg(feature = "sound")]
use std::io::BufReader;
#[cfg(feature = "sound")]
use tracing::warn;

/// Audio collaborator
pub trait Audio {
    /// Start looping `path` at `volume` (0.0 to 1.0), replacing any current track
    fn play_looping(&mut self, path: &Path, volume: f32);

    /// Stop whatever is playing
    fn stop(&mut self);

    /// Whether a track is currently looping
    fn is_playing(&self) -> bool;
}

/// Audio that never makes a sound. Used with `--mute`, without the `sound`
/// feature, or when no output device is available.
#[derive(Debug, Default)]
pub struct SilentAudio {
    track: Option<PathBuf>,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Audio for SilentAudio {
    fn play_looping(&mut self, path: &Path, _volume: f32) {
        debug!("Audio muted, not playing {:?}", path);
        self.track = Some(path.to_path_buf());
    }

    fn stop(&mut self) {
        self.track = None;
    }

    fn is_playing(&self) -> bool {
        self.track.is_some()
    }
}

/// Music player on the default output device
#[cfg(feature = "sound")]
pub struct SoundPlayer {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    sink: Option<Sink>,
}

#[cfg(feature = "sound")]
impl SoundPlayer {
    /// Open the default output device
    pub fn new() -> Result<Self> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            stream_handle,
            sink: None,
        })
    }
}

#[cfg(feature = "sound")]
impl Audio for SoundPlayer {
    fn play_looping(&mut self, path: &Path, volume: f32) {
        self.stop();

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Failed to open music file {:?}: {}", path, e);
                return;
            }
        };

        let source = match Decoder::new(BufReader::new(file)) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to decode music file {:?}: {}", path, e);
                return;
            }
        };

        let sink = match Sink::try_new(&self.stream_handle) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to create audio sink: {}", e);
                return;
            }
        };
        let volume = volume.clamp(0.0, 1.0);
        sink.set_volume(volume);
        sink.append(source.repeat_infinite());
        self.sink = Some(sink);

        debug!("Looping music: {:?} at volume {}", path, volume);
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            debug!("Music stopped");
        }
    }

    fn is_playing(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| !s.empty())
    }
}

/// Pick the audio backend for this run
pub fn open_audio(muted: bool) -> Box<dyn Audio> {
    if muted {
        return Box::new(SilentAudio::new());
    }

    #[cfg(feature = "sound")]
    match SoundPlayer::new() {
        Ok(player) => return Box::new(player),
        Err(e) => warn!("No audio output available, continuing silently: {}", e),
    }

    Box::new(SilentAudio::new())
}
