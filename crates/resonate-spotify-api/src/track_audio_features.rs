use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackAudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub duration_ms: i64,
    pub energy: f64,
    pub id: String,
    pub instrumentalness: f64,
    pub key: i64,
    pub liveness: f64,
    pub loudness: f64,
    pub mode: i64,
    pub speechiness: f64,
    pub tempo: f64,
    pub time_signature: i64,
    pub valence: f64,
}

/// Entries are `null` for ids Spotify has no features for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveralAudioFeatures {
    pub audio_features: Vec<Option<TrackAudioFeatures>>,
}
