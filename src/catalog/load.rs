use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{Catalog, Track};

/// Authoring mistakes in the playlist file, surfaced at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read playlist {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse playlist {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("playlist {path} contains no tracks")]
    Empty { path: String },
    #[error("playlist {path} reuses track id {id}")]
    DuplicateId { path: String, id: u64 },
}

/// On-disk playlist schema.
#[derive(Debug, Deserialize)]
struct PlaylistFile {
    title: Option<String>,
    #[serde(default)]
    tracks: Vec<Track>,
}

impl Catalog {
    /// Load and validate the playlist at `path`, preserving file order.
    ///
    /// Duplicate ids and an empty track list fail here rather than surfacing
    /// as broken navigation during playback.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: shown.clone(),
            source,
        })?;

        let file: PlaylistFile = toml::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: shown.clone(),
            source,
        })?;

        if file.tracks.is_empty() {
            return Err(CatalogError::Empty { path: shown });
        }

        let mut seen = HashSet::new();
        for track in &file.tracks {
            if !seen.insert(track.id) {
                return Err(CatalogError::DuplicateId {
                    path: shown,
                    id: track.id,
                });
            }
        }

        Ok(Catalog::new(file.title, file.tracks))
    }
}
