//! Song types and in-memory filtering
//!
//! Pages load a band's full song list once and filter it locally while the
//! user types; `SongFilter` is that single-pass filter.

use super::ids::{BandId, SongId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song in a band's repertoire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub band_id: BandId,
    pub title: String,
    pub artist: Option<String>,
    /// Musical key ("Em", "C#m", ...)
    pub key: Option<String>,
    pub duration_secs: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Create a new song with a generated ID
    pub fn new(band_id: BandId, title: impl Into<String>) -> Self {
        Self {
            id: SongId::generate(),
            band_id,
            title: title.into(),
            artist: None,
            key: None,
            duration_secs: None,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSong {
    pub band_id: BandId,
    pub title: String,
    pub artist: Option<String>,
    pub key: Option<String>,
    pub duration_secs: Option<u32>,
}

/// Input for updating a song (None = leave unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSong {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub key: Option<String>,
    pub duration_secs: Option<u32>,
}

/// In-memory filter over a loaded song list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongFilter {
    /// Case-insensitive substring match against title and artist
    pub text: Option<String>,
    /// Exact key match
    pub key: Option<String>,
}

impl SongFilter {
    /// Check whether a song passes the filter
    pub fn matches(&self, song: &Song) -> bool {
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let in_title = song.title.to_lowercase().contains(&needle);
            let in_artist = song
                .artist
                .as_ref()
                .is_some_and(|a| a.to_lowercase().contains(&needle));
            if !in_title && !in_artist {
                return false;
            }
        }

        if let Some(key) = &self.key {
            if song.key.as_deref() != Some(key.as_str()) {
                return false;
            }
        }

        true
    }
}

/// Filter a loaded song list, preserving its order
pub fn filter_songs<'a>(songs: &'a [Song], filter: &SongFilter) -> Vec<&'a Song> {
    songs.iter().filter(|s| filter.matches(s)).collect()
}
