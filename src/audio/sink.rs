//! Utilities for creating `rodio` sinks from source urls.
//!
//! The helpers here resolve a playlist url to a local path and encapsulate
//! opening/decoding it into a prepared, paused `Sink`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, Sink};

use super::types::PlaybackError;

/// Resolve a playlist url to a filesystem path.
///
/// `file://` urls are unwrapped, absolute paths pass through, and anything
/// else is taken relative to `base_dir` (the playlist file's directory).
pub(super) fn resolve_source(base_dir: &Path, url: &str) -> PathBuf {
    let path = url.strip_prefix("file://").unwrap_or(url);
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Open and decode `url` into a paused `Sink` connected to `stream`.
pub(super) fn prepare_sink(
    stream: &OutputStream,
    base_dir: &Path,
    url: &str,
) -> Result<Sink, PlaybackError> {
    let path = resolve_source(base_dir, url);

    let file = File::open(&path).map_err(|source| PlaybackError::Open {
        url: url.to_string(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
