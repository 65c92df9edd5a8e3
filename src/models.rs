//! Shared data shapes for the player.

use serde::{Deserialize, Serialize};

/// A playable track. Immutable reference data; no validation rules apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Library-wide identifier.
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Track length in seconds.
    pub duration: u32,
    /// Path or reference to the local music file.
    pub file: String,
}

/// One time-aligned lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Offset from track start, in seconds.
    pub time: f64,
    pub text: String,
}

/// Time-aligned lyrics for a track.
///
/// `song_id` references [`Song::id`] by convention only; nothing enforces
/// referential integrity. Lines are ordered by time ascending by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lyrics {
    pub song_id: u64,
    pub lines: Vec<LyricLine>,
}

impl Lyrics {
    /// Parse standard LRC text (`[mm:ss.xx]text` per line) into timed lines.
    ///
    /// Lines without a valid time tag (metadata tags, blank lines) are
    /// skipped. Lines come back in input order, which for well-formed LRC
    /// is time ascending.
    pub fn from_lrc(song_id: u64, text: &str) -> Self {
        let lines = text.lines().filter_map(parse_lrc_line).collect();
        Self { song_id, lines }
    }
}

fn parse_lrc_line(line: &str) -> Option<LyricLine> {
    let rest = line.strip_prefix('[')?;
    let (tag, text) = rest.split_once(']')?;
    let (minutes, seconds) = tag.split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    if !(0.0..60.0).contains(&seconds) {
        return None;
    }
    Some(LyricLine {
        time: f64::from(minutes) * 60.0 + seconds,
        text: text.trim().to_string(),
    })
}

/// Serializable snapshot of the whole player state.
///
/// Produced by [`crate::store::PlayerStore::snapshot`]; the store is the
/// single source of truth and this is its read model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub current_song: Option<Song>,
    pub is_playing: bool,
    /// Current playback position in seconds.
    pub current_time: f64,
    pub song_list: Vec<Song>,
    pub current_lyrics: String,
}
