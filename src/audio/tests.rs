use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use super::sink::resolve_source;
use super::{AudioCmd, AudioPlayer, DeviceEvent};
use crate::config::AudioSettings;

#[test]
fn resolve_source_joins_relative_urls_to_the_base_dir() {
    let base = Path::new("/tmp/diary");
    assert_eq!(
        resolve_source(base, "audio/morning.flac"),
        PathBuf::from("/tmp/diary/audio/morning.flac")
    );
}

#[test]
fn resolve_source_keeps_absolute_paths_and_unwraps_file_urls() {
    let base = Path::new("/tmp/diary");
    assert_eq!(resolve_source(base, "/opt/a.flac"), PathBuf::from("/opt/a.flac"));
    assert_eq!(
        resolve_source(base, "file:///opt/a.flac"),
        PathBuf::from("/opt/a.flac")
    );
}

#[test]
fn play_of_an_unusable_source_reports_failed_for_that_generation() {
    let dir = tempfile::tempdir().unwrap();
    let player = AudioPlayer::new(dir.path().to_path_buf(), AudioSettings::default());

    player
        .send(AudioCmd::SetSource("missing.flac".into()))
        .unwrap();
    player.send(AudioCmd::Load).unwrap();
    player.send(AudioCmd::Play { generation: 7 }).unwrap();

    // The device resolves asynchronously; poll until it answers.
    let deadline = Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(e) = player.try_event() {
            break e;
        }
        assert!(
            Instant::now() < deadline,
            "no device event before the deadline"
        );
        thread::sleep(Duration::from_millis(10));
    };

    // Open fails on the missing file; on machines with no audio device at
    // all, NoOutput is reported instead. Either way the generation sticks.
    match event {
        DeviceEvent::Failed { generation, .. } => assert_eq!(generation, 7),
        other => panic!("unexpected device event: {other:?}"),
    }

    player.quit_softly(Duration::ZERO);
}

#[test]
fn quit_softly_joins_the_device_thread() {
    let dir = tempfile::tempdir().unwrap();
    let player = AudioPlayer::new(dir.path().to_path_buf(), AudioSettings::default());
    player.quit_softly(Duration::ZERO);

    // The thread is gone, so further commands are dropped on the floor.
    assert!(player.send(AudioCmd::Load).is_err());
}
