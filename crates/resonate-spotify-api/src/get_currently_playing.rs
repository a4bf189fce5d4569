use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use crate::player::CurrentlyPlaying;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
    ///
    /// `None` when the player is idle (`204 No Content`).
    pub async fn get_currently_playing(&self) -> Result<Option<CurrentlyPlaying>, FetchError> {
        self.fetch_optional("me/player/currently-playing", &[]).await
    }
}
