use serde::Deserialize;

/// One entry of the audio diary.
///
/// `duration` is authored display text (for example `"6:17"`); it is rendered
/// verbatim and never parsed. `url` is an opaque locator that only the audio
/// device interprets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    pub url: String,
}

/// The ordered collection of all tracks.
///
/// File order is playback order: it decides which track comes next when one
/// finishes, wrapping from the last back to the first.
#[derive(Debug, Clone)]
pub struct Catalog {
    title: Option<String>,
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(title: Option<String>, tracks: Vec<Track>) -> Self {
        Self { title, tracks }
    }

    /// The playlist's own display title, when the file provides one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Position of the track with `id`, or `None` when no such track exists.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
