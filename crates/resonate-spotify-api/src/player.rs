use crate::track::Track;
use serde::Deserialize;
use serde::Serialize;

/// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
///
/// `item` is `null` for ads and, unless requested, podcast episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    pub is_playing: bool,
    pub progress_ms: Option<u64>,
    pub currently_playing_type: Option<String>,
    pub item: Option<Track>,
}

/// https://developer.spotify.com/documentation/web-api/reference/get-recently-played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyPlayed {
    pub items: Vec<PlayHistory>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayHistory {
    pub track: Track,
    pub played_at: String,
}
