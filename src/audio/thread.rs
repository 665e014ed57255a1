use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use crate::config::AudioSettings;

use super::sink::prepare_sink;
use super::types::{AudioCmd, DeviceEvent, PlaybackError, PlaybackHandle};

pub(super) fn spawn_audio_thread(
    base_dir: PathBuf,
    rx: Receiver<AudioCmd>,
    events: Sender<DeviceEvent>,
    playback_info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // A missing output device is not fatal here: the UI stays usable and
        // every Play for a source is answered with a Failed event instead.
        let (stream, stream_err) = match OutputStreamBuilder::open_default_stream() {
            Ok(mut s) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful
                // in debugging, but noisy for a TUI app.
                s.log_on_drop(false);
                (Some(s), None)
            }
            Err(e) => {
                log::warn!("no audio output device: {e}");
                (None, Some(e.to_string()))
            }
        };

        // Source url recorded by SetSource, consumed by Load.
        let mut source: Option<String> = None;
        // Sink prepared by Load, waiting for Play. Keeping the Err side too
        // lets Play report the failure under the generation it was given.
        let mut pending: Option<Result<Sink, PlaybackError>> = None;
        // The sink currently playing (or paused) and its generation stamp.
        let mut active: Option<Sink> = None;
        let mut active_generation: Option<u64> = None;
        let mut paused = false;

        // Spawn a ticker thread to update playback_info.elapsed periodically.
        let info_for_ticker_clone = playback_info.clone();
        thread::spawn(move || loop {
            thread::sleep(Duration::from_millis(500));
            let mut info = info_for_ticker_clone.lock().unwrap();
            if info.playing {
                info.elapsed = info.elapsed + Duration::from_millis(500);
            }
        });

        fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
            if fade_out_ms == 0 {
                sink.set_volume(0.0);
                return;
            }
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            sink.set_volume(1.0);
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(1.0 - t);
                thread::sleep(Duration::from_millis(step_ms));
            }
            sink.set_volume(0.0);
        }

        let end_poll = Duration::from_millis(audio_settings.end_poll_ms.max(1));

        loop {
            match rx.recv_timeout(end_poll) {
                Ok(cmd) => match cmd {
                    AudioCmd::SetSource(url) => {
                        source = Some(url);
                    }

                    AudioCmd::Load => {
                        // Whatever was playing is gone now; any later end/fail
                        // of it must not be reported.
                        if let Some(s) = active.take() {
                            s.stop();
                        }
                        active_generation = None;
                        paused = false;

                        pending = source.as_ref().map(|url| match &stream {
                            Some(stream) => prepare_sink(stream, &base_dir, url),
                            None => Err(PlaybackError::NoOutput(
                                stream_err.clone().unwrap_or_else(|| "unavailable".into()),
                            )),
                        });

                        if let Ok(mut info) = playback_info.lock() {
                            info.elapsed = Duration::ZERO;
                            info.playing = false;
                        }
                    }

                    AudioCmd::Play { generation } => match pending.take() {
                        Some(Ok(sink)) => {
                            sink.play();
                            active = Some(sink);
                            active_generation = Some(generation);
                            paused = false;
                            if let Ok(mut info) = playback_info.lock() {
                                info.elapsed = Duration::ZERO;
                                info.playing = true;
                            }
                        }
                        Some(Err(error)) => {
                            let _ = events.send(DeviceEvent::Failed { generation, error });
                        }
                        // Play without a prior Load has nothing to start.
                        None => {}
                    },

                    AudioCmd::TogglePause => {
                        if let Some(ref s) = active {
                            if paused {
                                s.play();
                            } else {
                                s.pause();
                            }
                            paused = !paused;
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = !paused;
                            }
                        }
                    }

                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = active {
                            if !paused {
                                // Fade out gently before stopping.
                                fade_out_sink(s, fade_out_ms);
                            }
                            s.stop();
                        }
                        // Update shared state so UI/MPRIS don't keep showing Playing.
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic check for the natural end of the active source.
                    if let Some(ref s) = active {
                        if !paused && s.empty() {
                            active = None;
                            if let Some(generation) = active_generation.take() {
                                let _ = events.send(DeviceEvent::Ended { generation });
                            }
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = false;
                            }
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
