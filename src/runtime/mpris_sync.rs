use crate::app::App;
use crate::mpris::MprisHandle;
use crate::player::Player;

pub fn update_mpris(mpris: &MprisHandle, app: &App, player: &Player) {
    mpris.set_track_metadata(player.current());
    mpris.set_playback(app.playback);
}
