use crate::fetch::FetchError;
use crate::fetch::SpotifyClient;
use crate::recommendations::Recommendations;
use crate::recommendations::recommendation_query;
use resonate_core::model::RecommendationRequest;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-recommendations
    pub async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendations, FetchError> {
        self.fetch("recommendations", &recommendation_query(request))
            .await
    }
}
