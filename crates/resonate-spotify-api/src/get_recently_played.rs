use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use crate::player::RecentlyPlayed;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-recently-played
    pub async fn get_recently_played(&self, limit: u32) -> Result<RecentlyPlayed, FetchError> {
        self.fetch("me/player/recently-played", &[("limit", limit.to_string())]).await
    }
}
