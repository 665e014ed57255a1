use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_playlist(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn t(id: u64, title: &str, url: &str) -> Track {
    Track {
        id,
        title: title.into(),
        description: String::new(),
        duration: String::new(),
        url: url.into(),
    }
}

#[test]
fn load_preserves_authored_order_and_fields() {
    let (_dir, path) = write_playlist(
        r#"
title = "My Audio Diary"

[[tracks]]
id = 1
title = "Morning Pages"
description = "A quiet start before the day gets loud."
duration = "6:17"
url = "audio/morning-pages.flac"

[[tracks]]
id = 2
title = "Afternoon Walk"
duration = "5:03"
url = "audio/afternoon-walk.flac"

[[tracks]]
id = 3
title = "Night Thoughts"
url = "audio/night-thoughts.flac"
"#,
    );

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.title(), Some("My Audio Diary"));
    assert_eq!(catalog.len(), 3);

    let first = catalog.get(0).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.title, "Morning Pages");
    assert_eq!(first.description, "A quiet start before the day gets loud.");
    assert_eq!(first.duration, "6:17");
    assert_eq!(first.url, "audio/morning-pages.flac");

    // Omitted description and duration default to empty display text.
    assert_eq!(catalog.get(1).unwrap().description, "");
    assert_eq!(catalog.get(2).unwrap().duration, "");
}

#[test]
fn index_of_finds_tracks_by_id() {
    let catalog = Catalog::new(None, vec![t(10, "A", "a.flac"), t(20, "B", "b.flac")]);
    assert_eq!(catalog.index_of(10), Some(0));
    assert_eq!(catalog.index_of(20), Some(1));
    assert_eq!(catalog.index_of(99), None);
}

#[test]
fn load_rejects_duplicate_ids() {
    let (_dir, path) = write_playlist(
        r#"
[[tracks]]
id = 1
title = "A"
url = "a.flac"

[[tracks]]
id = 1
title = "B"
url = "b.flac"
"#,
    );
    match Catalog::load(&path) {
        Err(CatalogError::DuplicateId { id, .. }) => assert_eq!(id, 1),
        other => panic!("expected a duplicate id error, got {other:?}"),
    }
}

#[test]
fn load_rejects_an_empty_playlist() {
    let (_dir, path) = write_playlist("title = \"Empty\"\n");
    assert!(matches!(Catalog::load(&path), Err(CatalogError::Empty { .. })));
}

#[test]
fn load_rejects_unparseable_toml() {
    let (_dir, path) = write_playlist("tracks = not valid toml");
    assert!(matches!(Catalog::load(&path), Err(CatalogError::Parse { .. })));
}

#[test]
fn load_reports_missing_files_as_io_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(Catalog::load(&path), Err(CatalogError::Io { .. })));
}

#[test]
fn urls_are_stored_verbatim() {
    // Urls are opaque at this layer; only the audio device interprets them.
    let (_dir, path) = write_playlist(
        r#"
[[tracks]]
id = 1
title = "Remote"
url = "https://example.net/feed/entry.mp3"
"#,
    );
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.get(0).unwrap().url, "https://example.net/feed/entry.mp3");
}
