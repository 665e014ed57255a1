use std::sync::mpsc::Sender;

use crate::audio::{AudioCmd, DeviceEvent};
use crate::catalog::{Catalog, Track};

/// The playback controller.
///
/// Selection state lives here and nowhere else: the device only ever hears
/// about it through commands, and only talks back through [`DeviceEvent`]s.
/// Every selection bumps `generation`, and device events carry the generation
/// they belong to, so a resolution of an already-replaced source can be told
/// apart from the current one and dropped.
pub struct Player {
    catalog: Catalog,
    cmds: Sender<AudioCmd>,
    current: Option<Track>,
    generation: u64,
}

impl Player {
    pub fn new(catalog: Catalog, cmds: Sender<AudioCmd>) -> Self {
        Self {
            catalog,
            cmds,
            current: None,
            generation: 0,
        }
    }

    /// The selected track, if any.
    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Select `track` and (re)start playback of its source.
    ///
    /// Selection is unconditional: picking the already-current track restarts
    /// it from the beginning, and a track that is not in the catalog is
    /// accepted too (it just has no "next"). The selection sticks even if the
    /// device later reports that the source could not be played.
    pub fn select_track(&mut self, track: Track) {
        self.generation += 1;

        let _ = self.cmds.send(AudioCmd::SetSource(track.url.clone()));
        let _ = self.cmds.send(AudioCmd::Load);
        let _ = self.cmds.send(AudioCmd::Play {
            generation: self.generation,
        });

        self.current = Some(track);
    }

    /// Select the catalog track after the current one, wrapping from the last
    /// back to the first.
    ///
    /// A silent no-op when nothing is selected or the current track is not in
    /// the catalog.
    pub fn advance_to_next(&mut self) {
        let Some(current) = self.current.as_ref() else {
            return;
        };
        let Some(index) = self.catalog.index_of(current.id) else {
            return;
        };

        let next_index = (index + 1) % self.catalog.len();
        if let Some(next) = self.catalog.get(next_index).cloned() {
            self.select_track(next);
        }
    }

    /// React to a resolution reported by the audio device.
    ///
    /// Events stamped with an older generation describe a source that has
    /// since been replaced; they are logged and dropped. A live failure keeps
    /// the selection as it is, so the view still shows what the user picked.
    pub fn handle_device_event(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Ended { generation } => {
                if generation != self.generation {
                    log::debug!("discarding stale end of generation {generation}");
                    return;
                }
                self.advance_to_next();
            }
            DeviceEvent::Failed { generation, error } => {
                if generation != self.generation {
                    log::debug!("discarding stale failure of generation {generation}: {error}");
                    return;
                }
                log::warn!("playback failed: {error}");
            }
        }
    }
}
