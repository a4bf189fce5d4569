use serde::Deserialize;
use serde::Serialize;

/// https://developer.spotify.com/documentation/web-api/reference/get-track
///
/// Local files come back without an id, and simplified track objects omit
/// `album` and `popularity`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub album: Option<Album>,
    pub artists: Vec<Artist>,
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    pub id: Option<String>,
    pub name: String,
    pub popularity: Option<i64>,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub is_local: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<i64>,
    pub width: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: Option<String>,
    pub name: String,
}

/// https://developer.spotify.com/documentation/web-api/reference/get-several-tracks
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveralTracks {
    pub tracks: Vec<Option<Track>>,
}
