//! Audio-related small types and handles.
//!
//! This module defines the command and event vocabulary spoken between the
//! playback controller and the audio device thread, plus the shared playback
//! info handle read by the UI.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

/// Commands sent from the controller to the audio device thread.
#[derive(Debug)]
pub enum AudioCmd {
    /// Record `url` as the source for the next `Load`.
    SetSource(String),
    /// Drop whatever is playing and prepare the recorded source, paused.
    Load,
    /// Start the prepared source. `generation` stamps every event the device
    /// reports back about this playback attempt.
    Play { generation: u64 },
    /// Toggle pause/resume of the active source.
    TogglePause,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Events reported back by the audio device thread.
///
/// Both carry the generation of the playback attempt they belong to, so the
/// controller can discard resolutions of sources it has already replaced.
#[derive(Debug)]
pub enum DeviceEvent {
    /// The source played to its natural end.
    Ended { generation: u64 },
    /// The source could not be started.
    Failed {
        generation: u64,
        error: PlaybackError,
    },
}

/// Why a source could not be played.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("cannot open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("no audio output device: {0}")]
    NoOutput(String),
}

#[derive(Debug, Clone)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Elapsed playback time for the current source.
    pub elapsed: Duration,
    /// Whether playback is currently active.
    pub playing: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            playing: false,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
