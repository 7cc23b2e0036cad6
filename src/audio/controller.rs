//! Fire-and-forget playback of the fixed game cues.
//!
//! Cue data is read into memory once at startup; a fresh decoder is created
//! per playback (rodio's `Decoder` wants owned data with a `'static`
//! lifetime). Playback failures are logged and swallowed: sound must never
//! affect game logic. When no output device is available the controller is
//! built disabled and every operation is a no-op.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::cue::CueKind;
use crate::config::AudioConfig;
use crate::error::AudioError;

struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    /// The looping background track keeps its sink so it can be stopped;
    /// one-shot cues are detached instead.
    music_sink: Mutex<Option<Sink>>,
}

pub struct AudioController {
    output: Option<AudioOutput>,
    cues: HashMap<CueKind, Arc<Vec<u8>>>,
    effects_volume: f32,
    music_volume: f32,
}

impl AudioController {
    /// Open the default output device and preload every assigned cue.
    pub fn new(config: &AudioConfig) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| AudioError::StreamInitFailed(Box::new(e)))?;

        let mut cues = HashMap::new();
        cues.insert(CueKind::Flip, load_cue(&config.flip_sound)?);
        cues.insert(CueKind::Match, load_cue(&config.match_sound)?);
        cues.insert(CueKind::Music, load_cue(&config.music)?);

        // Win and game-over cues are optional; absent means silent
        if let Some(path) = &config.win_sound {
            cues.insert(CueKind::Win, load_cue(path)?);
        }
        if let Some(path) = &config.game_over_sound {
            cues.insert(CueKind::GameOver, load_cue(path)?);
        }

        tracing::info!(cues = cues.len(), "Audio controller ready");

        Ok(Self {
            output: Some(AudioOutput {
                _stream: stream,
                handle,
                music_sink: Mutex::new(None),
            }),
            cues,
            effects_volume: config.effects_volume,
            music_volume: config.music_volume,
        })
    }

    /// Build a controller with no output; every operation is a no-op.
    pub fn disabled() -> Self {
        Self {
            output: None,
            cues: HashMap::new(),
            effects_volume: 0.0,
            music_volume: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Number of cues with sound data assigned.
    pub fn loaded_count(&self) -> usize {
        self.cues.len()
    }

    /// Play a one-shot cue. Unassigned cues stay silent; failures are
    /// logged and dropped.
    pub fn play(&self, cue: CueKind) {
        if let Err(e) = self.try_play(cue) {
            tracing::warn!(%cue, error = %e, "Cue playback failed");
        }
    }

    fn try_play(&self, cue: CueKind) -> Result<(), AudioError> {
        let Some(output) = &self.output else {
            return Ok(());
        };
        let Some(data) = self.cues.get(&cue) else {
            tracing::debug!(%cue, "No sound assigned");
            return Ok(());
        };

        let decoder = Decoder::new(Cursor::new((**data).clone()))
            .map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;
        let sink = Sink::try_new(&output.handle)
            .map_err(|e| AudioError::PlaybackFailed(Box::new(e)))?;
        sink.set_volume(self.effects_volume);
        sink.append(decoder);
        sink.detach();

        Ok(())
    }

    /// Start the looping background track, replacing any previous one.
    pub fn start_music(&self) {
        if let Err(e) = self.try_start_music() {
            tracing::warn!(error = %e, "Music playback failed");
        }
    }

    fn try_start_music(&self) -> Result<(), AudioError> {
        let Some(output) = &self.output else {
            return Ok(());
        };
        let Some(data) = self.cues.get(&CueKind::Music) else {
            tracing::debug!("No music assigned");
            return Ok(());
        };

        let decoder = Decoder::new(Cursor::new((**data).clone()))
            .map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;
        let sink = Sink::try_new(&output.handle)
            .map_err(|e| AudioError::PlaybackFailed(Box::new(e)))?;
        sink.set_volume(self.music_volume);
        sink.append(decoder.repeat_infinite());

        let mut slot = output.music_sink.lock();
        if let Some(old) = slot.take() {
            old.stop();
        }
        *slot = Some(sink);

        Ok(())
    }

    /// Stop the background track. The sink is discarded, so the next
    /// `start_music` begins from the top of the track.
    pub fn stop_music(&self) {
        if let Some(output) = &self.output {
            if let Some(sink) = output.music_sink.lock().take() {
                sink.stop();
            }
        }
    }
}

fn load_cue(path: impl AsRef<Path>) -> Result<Arc<Vec<u8>>, AudioError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| AudioError::LoadFailed {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;

    // Warm up the decoder once to catch bad files at startup
    Decoder::new(Cursor::new(data.clone()))
        .map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;

    tracing::debug!("Preloaded sound: {} ({} bytes)", path.display(), data.len());
    Ok(Arc::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_controller_is_inert() {
        let controller = AudioController::disabled();
        assert!(!controller.is_enabled());
        assert_eq!(controller.loaded_count(), 0);

        // All operations are no-ops rather than panics
        controller.play(CueKind::Flip);
        controller.play(CueKind::Win);
        controller.start_music();
        controller.stop_music();
    }

    #[test]
    fn test_load_cue_missing_file() {
        let result = load_cue("nonexistent-cue.mp3");
        assert!(matches!(result, Err(AudioError::LoadFailed { .. })));
    }

    #[test]
    fn test_new_fails_cleanly_without_assets() {
        // Either the output device is missing (headless CI) or the default
        // cue paths do not exist; both must surface as a typed error
        let result = AudioController::new(&AudioConfig::default());
        assert!(result.is_err());
    }
}
