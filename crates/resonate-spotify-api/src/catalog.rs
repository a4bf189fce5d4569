//! [`CatalogService`] backed by the Spotify Web API.
//!
//! Raw Spotify payloads are checked here: tracks without ids, `null`
//! feature entries and misaligned responses become upstream-data errors
//! before anything reaches the core.

use crate::audio_analysis;
use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use crate::track;
use crate::track_audio_features::TrackAudioFeatures;
use resonate_core::CatalogService;
use resonate_core::CoreError;
use resonate_core::TrackId;
use resonate_core::error::Result;
use resonate_core::model;
use tracing::debug;
use tracing::warn;

impl From<FetchError> for CoreError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Decode { source, .. } => {
                CoreError::upstream_data(format!("malformed response: {source}"))
            }
            FetchError::Empty(path) => {
                CoreError::upstream_data(format!("empty response from {path}"))
            }
            other => CoreError::Upstream(Box::new(other)),
        }
    }
}

impl TryFrom<track::Track> for model::Track {
    type Error = CoreError;

    fn try_from(track: track::Track) -> Result<Self> {
        let id = track.id.ok_or_else(|| {
            CoreError::upstream_data(format!("track {:?} has no id (local file?)", track.name))
        })?;
        Ok(model::Track {
            id: TrackId(id),
            artists: track
                .artists
                .into_iter()
                .map(|a| model::Artist {
                    id: a.id,
                    name: a.name,
                })
                .collect(),
            title: track.name,
            duration_ms: track.duration_ms,
            preview_url: track.preview_url,
        })
    }
}

impl From<TrackAudioFeatures> for model::AudioFeatures {
    fn from(features: TrackAudioFeatures) -> Self {
        model::AudioFeatures {
            id: TrackId(features.id),
            tempo: features.tempo,
            danceability: features.danceability,
            energy: features.energy,
            loudness: features.loudness,
            valence: features.valence,
        }
    }
}

impl From<audio_analysis::AudioAnalysis> for model::AudioAnalysis {
    fn from(analysis: audio_analysis::AudioAnalysis) -> Self {
        model::AudioAnalysis {
            track_duration_ms: analysis.track.duration * 1000.0,
            segments: analysis
                .segments
                .into_iter()
                .map(|s| model::AnalysisSegment {
                    start: s.start,
                    duration: s.duration,
                    loudness_max: s.loudness_max,
                })
                .collect(),
        }
    }
}

fn convert_tracks(tracks: Vec<track::Track>) -> Result<Vec<model::Track>> {
    tracks.into_iter().map(model::Track::try_from).collect()
}

/// Pair each requested id with its entry, rejecting gaps and reordering.
pub(crate) fn align<T>(
    ids: &[TrackId],
    entries: Vec<Option<T>>,
    what: &str,
    id_of: impl Fn(&T) -> &str,
) -> Result<Vec<T>> {
    if entries.len() != ids.len() {
        return Err(CoreError::upstream_data(format!(
            "requested {what} for {} tracks, got {}",
            ids.len(),
            entries.len()
        )));
    }
    ids.iter()
        .zip(entries)
        .map(|(id, entry)| {
            let entry =
                entry.ok_or_else(|| CoreError::upstream_data(format!("no {what} for {id}")))?;
            if id_of(&entry) != id.0 {
                return Err(CoreError::upstream_data(format!(
                    "{what} for {} returned in place of {id}",
                    id_of(&entry)
                )));
            }
            Ok(entry)
        })
        .collect()
}

impl CatalogService for SpotifyClient {
    async fn currently_playing(&self) -> Result<Option<model::Track>> {
        let Some(playing) = self.get_currently_playing().await? else {
            debug!("Player is idle");
            return Ok(None);
        };
        match playing.item {
            Some(item) => Ok(Some(item.try_into()?)),
            None => {
                debug!(
                    "Currently playing {:?} has no track item",
                    playing.currently_playing_type
                );
                Ok(None)
            }
        }
    }

    async fn track(&self, id: &TrackId) -> Result<model::Track> {
        self.get_track(id).await?.try_into()
    }

    async fn tracks(&self, ids: &[TrackId]) -> Result<Vec<model::Track>> {
        let tracks = self.get_several_tracks(ids).await?;
        let tracks = align(ids, tracks, "track", |t: &track::Track| {
            t.id.as_deref().unwrap_or_default()
        })?;
        convert_tracks(tracks)
    }

    async fn audio_features(&self, ids: &[TrackId]) -> Result<Vec<model::AudioFeatures>> {
        let features = self.get_several_audio_features(ids).await?;
        let features = align(ids, features, "audio features", |f: &TrackAudioFeatures| {
            f.id.as_str()
        })?;
        Ok(features.into_iter().map(model::AudioFeatures::from).collect())
    }

    async fn audio_analysis(&self, id: &TrackId) -> Result<model::AudioAnalysis> {
        Ok(self.get_audio_analysis(id).await?.into())
    }

    async fn recommendations(
        &self,
        request: &model::RecommendationRequest,
    ) -> Result<Vec<model::Track>> {
        let recs = self.get_recommendations(request).await?;
        if recs.tracks.len() < request.limit as usize {
            warn!(
                "Asked for {} recommendations, Spotify returned {}",
                request.limit,
                recs.tracks.len()
            );
        }
        convert_tracks(recs.tracks)
    }

    async fn recently_played(&self, limit: u32) -> Result<Vec<model::Track>> {
        let history = self.get_recently_played(limit).await?;
        convert_tracks(history.items.into_iter().map(|h| h.track).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::CurrentlyPlaying;
    use crate::player::RecentlyPlayed;
    use crate::track_audio_features::SeveralAudioFeatures;
    use resonate_core::ErrorKind;
    use serde_json::json;

    fn track_json(id: serde_json::Value) -> serde_json::Value {
        json!({
            "album": { "id": "2up3OPMp9Tb4dAKM2erWXQ", "name": "Whenever You Need Somebody", "images": [] },
            "artists": [{ "id": "0gxyHStUsqpMadRV0Di1Qt", "name": "Rick Astley" }],
            "duration_ms": 213573,
            "explicit": false,
            "id": id,
            "name": "Never Gonna Give You Up",
            "popularity": 80,
            "preview_url": null,
            "is_local": false
        })
    }

    fn features_json(id: &str, valence: f64) -> serde_json::Value {
        json!({
            "acousticness": 0.14, "danceability": 0.727, "duration_ms": 213573,
            "energy": 0.939, "id": id, "instrumentalness": 0.0, "key": 8,
            "liveness": 0.151, "loudness": -11.855, "mode": 1, "speechiness": 0.0369,
            "tempo": 113.301, "time_signature": 4, "valence": valence
        })
    }

    fn feature_id(features: &TrackAudioFeatures) -> &str {
        features.id.as_str()
    }

    #[test]
    fn converts_track() {
        let raw: track::Track =
            serde_json::from_value(track_json(json!("4uLU6hMCjMI75M1A2tKUQC"))).unwrap();
        let track = model::Track::try_from(raw).unwrap();
        assert_eq!(track.id, TrackId::from("4uLU6hMCjMI75M1A2tKUQC"));
        assert_eq!(track.title, "Never Gonna Give You Up");
        assert_eq!(track.artists[0].name, "Rick Astley");
        assert_eq!(track.duration_ms, 213_573);
        assert_eq!(track.preview_url, None);
    }

    #[test]
    fn local_track_without_id_is_upstream_data_error() {
        let raw: track::Track = serde_json::from_value(track_json(json!(null))).unwrap();
        let err = model::Track::try_from(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamData);
    }

    #[test]
    fn missing_required_field_fails_to_decode() {
        let mut value = track_json(json!("x"));
        value.as_object_mut().unwrap().remove("duration_ms");
        let err = serde_json::from_value::<track::Track>(value).unwrap_err();
        let err: CoreError = FetchError::Decode {
            source: err,
            body: String::new(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UpstreamData);
    }

    #[test]
    fn idle_player_item_is_optional() {
        let playing: CurrentlyPlaying = serde_json::from_value(json!({
            "is_playing": false,
            "progress_ms": null,
            "currently_playing_type": "ad",
            "item": null
        }))
        .unwrap();
        assert!(playing.item.is_none());
    }

    #[test]
    fn recently_played_unwraps_history_items() {
        let history: RecentlyPlayed = serde_json::from_value(json!({
            "items": [
                { "track": track_json(json!("a")), "played_at": "2024-05-01T10:00:00.000Z" },
                { "track": track_json(json!("b")), "played_at": "2024-05-01T09:56:00.000Z" }
            ],
            "next": null
        }))
        .unwrap();
        let tracks = convert_tracks(history.items.into_iter().map(|h| h.track).collect()).unwrap();
        let ids: Vec<_> = tracks.iter().map(|t| t.id.0.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn features_keep_request_order_and_rename_nothing() {
        let raw: SeveralAudioFeatures = serde_json::from_value(json!({
            "audio_features": [features_json("b", 0.2), features_json("a", 0.9)]
        }))
        .unwrap();
        let ids = [TrackId::from("b"), TrackId::from("a")];
        let aligned = align(&ids, raw.audio_features, "audio features", feature_id).unwrap();
        let features: Vec<model::AudioFeatures> =
            aligned.into_iter().map(model::AudioFeatures::from).collect();
        assert_eq!(features[0].id, ids[0]);
        assert_eq!(features[0].valence, 0.2);
        assert_eq!(features[1].tempo, 113.301);
    }

    #[test]
    fn null_or_misordered_features_are_rejected() {
        let raw: SeveralAudioFeatures = serde_json::from_value(json!({
            "audio_features": [features_json("a", 0.5), null]
        }))
        .unwrap();
        let ids = [TrackId::from("a"), TrackId::from("b")];
        let err =
            align(&ids, raw.audio_features.clone(), "audio features", feature_id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamData);

        let swapped = [TrackId::from("b"), TrackId::from("a")];
        let entries = vec![raw.audio_features[0].clone(), raw.audio_features[0].clone()];
        assert!(align(&swapped, entries, "audio features", feature_id).is_err());
    }

    #[test]
    fn analysis_duration_becomes_milliseconds() {
        let raw: audio_analysis::AudioAnalysis = serde_json::from_value(json!({
            "track": { "duration": 207.959, "loudness": -5.883, "tempo": 118.211 },
            "segments": [
                { "start": 0.0, "duration": 0.24317, "confidence": 1.0,
                  "loudness_start": -60.0, "loudness_max": -22.878,
                  "loudness_max_time": 0.07, "loudness_end": 0.0 },
                { "start": 0.24317, "duration": 0.1, "loudness_max": -14.0 }
            ]
        }))
        .unwrap();
        let analysis = model::AudioAnalysis::from(raw);
        assert!((analysis.track_duration_ms - 207_959.0).abs() < 1e-6);
        assert_eq!(analysis.segments.len(), 2);
        assert_eq!(analysis.segments[1].loudness_max, -14.0);
    }
}
