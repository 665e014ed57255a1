use super::*;
use crate::catalog::{Catalog, Track};

fn t(id: u64, title: &str) -> Track {
    Track {
        id,
        title: title.into(),
        description: String::new(),
        duration: String::new(),
        url: format!("{title}.flac"),
    }
}

fn app_with(count: u64) -> App {
    let tracks = (1..=count).map(|i| t(i, &format!("Track {i}"))).collect();
    App::new(Catalog::new(None, tracks))
}

#[test]
fn cursor_wraps_forward_and_backward() {
    let mut app = app_with(3);
    assert_eq!(app.cursor, 0);

    app.next();
    app.next();
    assert_eq!(app.cursor, 2);
    app.next();
    assert_eq!(app.cursor, 0);

    app.prev();
    assert_eq!(app.cursor, 2);
}

#[test]
fn cursor_jumps_to_first_and_last() {
    let mut app = app_with(4);
    app.select_last();
    assert_eq!(app.cursor, 3);
    app.select_first();
    assert_eq!(app.cursor, 0);
}

#[test]
fn cursor_navigation_tolerates_an_empty_catalog() {
    let mut app = App::new(Catalog::new(None, Vec::new()));
    app.next();
    app.prev();
    app.select_last();
    assert_eq!(app.cursor, 0);
    assert!(app.cursor_track().is_none());
    assert!(!app.has_tracks());
}

#[test]
fn cursor_track_follows_the_cursor() {
    let mut app = app_with(2);
    assert_eq!(app.cursor_track().map(|t| t.id), Some(1));
    app.next();
    assert_eq!(app.cursor_track().map(|t| t.id), Some(2));
}

#[test]
fn playback_state_derivation_prefers_the_selection() {
    // No selection is Stopped no matter what the device reports.
    assert_eq!(PlaybackState::derive(false, false), PlaybackState::Stopped);
    assert_eq!(PlaybackState::derive(false, true), PlaybackState::Stopped);
    assert_eq!(PlaybackState::derive(true, true), PlaybackState::Playing);
    assert_eq!(PlaybackState::derive(true, false), PlaybackState::Paused);
}

#[test]
fn details_window_toggles() {
    let mut app = app_with(1);
    assert!(!app.details_window);
    app.toggle_details_window();
    assert!(app.details_window);
    app.toggle_details_window();
    assert!(!app.details_window);
}
