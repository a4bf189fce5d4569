use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use crate::get_several_tracks::join_ids;
use crate::track_audio_features::SeveralAudioFeatures;
use crate::track_audio_features::TrackAudioFeatures;
use resonate_core::TrackId;

/// Most ids accepted by one `/audio-features` request.
pub const MAX_AUDIO_FEATURE_IDS: usize = 100;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-several-audio-features
    pub async fn get_several_audio_features(
        &self,
        track_ids: &[TrackId],
    ) -> Result<Vec<Option<TrackAudioFeatures>>, FetchError> {
        let mut rtn = Vec::with_capacity(track_ids.len());
        for chunk in track_ids.chunks(MAX_AUDIO_FEATURE_IDS) {
            let page: SeveralAudioFeatures = self
                .fetch("audio-features", &[("ids", join_ids(chunk))])
                .await?;
            rtn.extend(page.audio_features);
        }
        Ok(rtn)
    }
}
