use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/audiary/config.toml` or `~/.config/audiary/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `AUDIARY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio: AudioSettings::default(),
            ui: UiSettings::default(),
            library: LibrarySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// How often the device checks whether the current source has finished
    /// playing (milliseconds). Must be >= 1.
    pub end_poll_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            end_poll_ms: 200,
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box. Empty means "use the
    /// playlist's own title".
    pub header_text: String,

    /// Whether playlist rows show a shortened description under the title.
    pub show_descriptions: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: String::new(),
            show_descriptions: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Playlist file used when none is given on the command line.
    pub playlist: Option<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self { playlist: None }
    }
}
