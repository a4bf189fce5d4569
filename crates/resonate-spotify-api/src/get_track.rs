use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use crate::track::Track;
use resonate_core::TrackId;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-track
    pub async fn get_track(&self, track_id: &TrackId) -> Result<Track, FetchError> {
        self.fetch(&format!("tracks/{}", track_id), &[]).await
    }
}
