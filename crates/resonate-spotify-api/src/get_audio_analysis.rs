use crate::audio_analysis::AudioAnalysis;
use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use resonate_core::TrackId;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-audio-analysis
    pub async fn get_audio_analysis(
        &self,
        track_id: &TrackId,
    ) -> Result<AudioAnalysis, FetchError> {
        self.fetch(&format!("audio-analysis/{}", track_id), &[]).await
    }
}
