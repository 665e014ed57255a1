//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, PlaybackState};
use crate::config::UiSettings;
use crate::player::Player;

const CONTROLS_TEXT: &str = "[j/k] up/down | [gg/G] top/bottom | [enter] play selected | [space/p] play/pause | [n/l] next | [K] details | [q] quit";

/// Header used when neither the config nor the playlist names one.
const DEFAULT_HEADER: &str = "My Audio Diary";

/// Maximum characters of description shown inside a playlist row.
const ROW_DESCRIPTION_CHARS: usize = 72;

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Pick the header text: an explicit config value wins, then the playlist's
/// own title, then the built-in default.
fn header_text<'a>(ui_settings: &'a UiSettings, app: &'a App) -> &'a str {
    if !ui_settings.header_text.is_empty() {
        return &ui_settings.header_text;
    }
    app.catalog.title().unwrap_or(DEFAULT_HEADER)
}

/// Shorten `text` to at most `max_chars` characters, ellipsized when cut.
fn shortened(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI into the provided `frame` using `app` and `player` state.
pub fn draw(frame: &mut Frame, app: &App, player: &Player, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(header_text(ui_settings, app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" audiary ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now-playing card
    let card_text = match player.current() {
        Some(track) => {
            let elapsed = app
                .playback_handle
                .as_ref()
                .and_then(|h| h.lock().ok().map(|info| info.elapsed))
                .unwrap_or(Duration::ZERO);

            let state = match app.playback {
                PlaybackState::Playing => "Playing",
                PlaybackState::Paused => "Paused",
                PlaybackState::Stopped => "Stopped",
            };

            let mut lines = vec![track.title.clone()];
            if !track.description.is_empty() {
                lines.push(track.description.clone());
            }
            if !track.duration.is_empty() {
                lines.push(format!("Length: {}", track.duration));
            }
            lines.push(format!("{} • {}", format_mmss(elapsed), state));
            lines.join("\n")
        }
        None => "Pick a track from the playlist to start playing.".to_string(),
    };

    let card = Paragraph::new(card_text)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(card, chunks[1]);

    // Playlist
    {
        let current_id = player.current().map(|t| t.id);
        let tracks = app.catalog.tracks();
        let total = tracks.len();

        // Center the cursor when possible by creating a visible window.
        // Only build ListItems for the visible window.
        let rows_per_item: usize = if ui_settings.show_descriptions { 2 } else { 1 };
        let list_height = chunks[2].height as usize / rows_per_item;
        let sel_pos = app.cursor.min(total.saturating_sub(1));
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = if sel_pos > half { sel_pos - half } else { 0 };
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let visible_items: Vec<ListItem> = tracks[start..end]
            .iter()
            .map(|track| {
                let marker = if current_id == Some(track.id) {
                    "▶ "
                } else {
                    "  "
                };
                let mut row = format!("{marker}{}", track.title);
                if !track.duration.is_empty() {
                    row.push_str(&format!(" ({})", track.duration));
                }
                if ui_settings.show_descriptions {
                    row.push('\n');
                    if !track.description.is_empty() {
                        row.push_str("    ");
                        row.push_str(&shortened(&track.description, ROW_DESCRIPTION_CHARS));
                    }
                }
                ListItem::new(row)
            })
            .collect();

        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Overlay details popup (keeps list visible under it)
    if app.details_window {
        // Keep the popup inside the list area so it doesn't cover header/card/footer.
        let list_area = chunks[2];
        let popup_area = centered_rect_sized(72, 9, list_area);
        frame.render_widget(Clear, popup_area);

        let details = match app.cursor_track() {
            Some(track) => {
                let description = if track.description.is_empty() {
                    "-"
                } else {
                    track.description.as_str()
                };
                let duration = if track.duration.is_empty() {
                    "-"
                } else {
                    track.duration.as_str()
                };
                format!(
                    "Title: {}\nDescription: {}\nLength: {}\nURL: {}",
                    track.title, description, duration, track.url
                )
            }
            None => "No track selected".to_string(),
        };
        let details_paragraph = Paragraph::new(details)
            .block(
                Block::default()
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    })
                    .borders(Borders::ALL)
                    .title(" details (K closes) "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(details_paragraph, popup_area);
    }

    let footer = Paragraph::new(CONTROLS_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[3]);
}
