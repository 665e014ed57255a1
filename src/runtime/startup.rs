use std::path::PathBuf;

use crate::config::Settings;

/// Playlist used when neither the command line nor the config names one.
const DEFAULT_PLAYLIST: &str = "playlist.toml";

/// Resolve the playlist path: the command-line argument wins, then the
/// `library.playlist` setting, then `playlist.toml` in the working directory.
pub fn resolve_playlist_path(arg: Option<String>, settings: &Settings) -> PathBuf {
    if let Some(arg) = arg {
        return PathBuf::from(arg);
    }
    if let Some(configured) = settings.library.playlist.as_deref() {
        return PathBuf::from(configured);
    }
    PathBuf::from(DEFAULT_PLAYLIST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn argument_wins_over_configured_playlist() {
        let mut settings = Settings::default();
        settings.library.playlist = Some("/srv/diary/playlist.toml".to_string());

        let p = resolve_playlist_path(Some("cli.toml".to_string()), &settings);
        assert_eq!(p, PathBuf::from("cli.toml"));
    }

    #[test]
    fn configured_playlist_wins_over_default() {
        let mut settings = Settings::default();
        settings.library.playlist = Some("/srv/diary/playlist.toml".to_string());

        let p = resolve_playlist_path(None, &settings);
        assert_eq!(p, PathBuf::from("/srv/diary/playlist.toml"));
    }

    #[test]
    fn falls_back_to_playlist_toml_in_the_working_directory() {
        let p = resolve_playlist_path(None, &Settings::default());
        assert_eq!(p, PathBuf::from("playlist.toml"));
    }
}
