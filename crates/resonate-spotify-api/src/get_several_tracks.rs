use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use crate::track::SeveralTracks;
use crate::track::Track;
use resonate_core::TrackId;

/// Most ids accepted by one `/tracks` request.
pub const MAX_TRACK_IDS: usize = 50;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-several-tracks
    ///
    /// Larger id lists are split into several requests; order is preserved and
    /// unknown ids come back as `None`.
    pub async fn get_several_tracks(
        &self,
        track_ids: &[TrackId],
    ) -> Result<Vec<Option<Track>>, FetchError> {
        let mut rtn = Vec::with_capacity(track_ids.len());
        for chunk in track_ids.chunks(MAX_TRACK_IDS) {
            let page: SeveralTracks = self.fetch("tracks", &[("ids", join_ids(chunk))]).await?;
            rtn.extend(page.tracks);
        }
        Ok(rtn)
    }
}

pub(crate) fn join_ids(ids: &[TrackId]) -> String {
    ids.iter()
        .map(|id| id.0.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
