//! Application model types: `App` and `PlaybackState`.
//!
//! The `App` struct holds the catalog, the list cursor and the playback
//! related flags used by the UI and runtime.

use crate::audio::PlaybackHandle;
use crate::catalog::{Catalog, Track};

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

impl PlaybackState {
    /// Derive the displayed state from the selection and the device.
    ///
    /// No selection is always `Stopped`; with a selection the device decides
    /// between `Playing` and `Paused`.
    pub fn derive(has_selection: bool, device_playing: bool) -> Self {
        if !has_selection {
            Self::Stopped
        } else if device_playing {
            Self::Playing
        } else {
            Self::Paused
        }
    }
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    /// The playlist row the cursor is on; independent of what is playing.
    pub cursor: usize,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,
    pub details_window: bool,
}

impl App {
    /// Create a new `App` for the provided `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cursor: 0,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            details_window: false,
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Return true if the catalog contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// The track under the cursor, if the catalog has any.
    pub fn cursor_track(&self) -> Option<&Track> {
        self.catalog.get(self.cursor)
    }

    /// Move the cursor to the next row, wrapping at the end.
    pub fn next(&mut self) {
        if self.has_tracks() {
            self.cursor = (self.cursor + 1) % self.catalog.len();
        }
    }

    /// Move the cursor to the previous row, wrapping at the start.
    pub fn prev(&mut self) {
        if self.has_tracks() {
            self.cursor = (self.cursor + self.catalog.len() - 1) % self.catalog.len();
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.catalog.len().saturating_sub(1);
    }

    pub fn toggle_details_window(&mut self) {
        self.details_window = !self.details_window;
    }
}
