use crate::CoreError;
use crate::error::Result;
use crate::model::AudioFeatures;
use crate::model::FormattedFeatures;
use crate::model::FormattedTrack;
use crate::model::Track;

/// Merge a track and its features into the public output shape.
///
/// `valence` is published as `mood`; every other number is passed through as is.
pub fn format_track(track: &Track, features: &AudioFeatures) -> Result<FormattedTrack> {
    if track.id != features.id {
        return Err(CoreError::upstream_data(format!(
            "audio features for {} returned for track {}",
            features.id, track.id
        )));
    }
    Ok(FormattedTrack {
        id: track.id.clone(),
        artists: track.artists.iter().map(|a| a.name.clone()).collect(),
        song: track.title.clone(),
        length_ms: track.duration_ms,
        preview_url: track.preview_url.clone(),
        features: FormattedFeatures {
            tempo: features.tempo,
            danceability: features.danceability,
            energy: features.energy,
            loudness: features.loudness,
            mood: features.valence,
        },
    })
}

/// Format tracks against features fetched for the same ids, in the same order.
pub fn format_aligned(tracks: &[Track], features: &[AudioFeatures]) -> Result<Vec<FormattedTrack>> {
    if tracks.len() != features.len() {
        return Err(CoreError::upstream_data(format!(
            "expected audio features for {} tracks, got {}",
            tracks.len(),
            features.len()
        )));
    }
    tracks
        .iter()
        .zip(features)
        .map(|(track, features)| format_track(track, features))
        .collect()
}
