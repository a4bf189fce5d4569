use crate::TrackId;
use crate::error::Result;
use crate::model::AudioAnalysis;
use crate::model::AudioFeatures;
use crate::model::RecommendationRequest;
use crate::model::Track;
use std::future::Future;

/// The upstream music catalog the core reads from.
///
/// Implementations own credentials and transport. Everything they return has
/// already been validated; malformed upstream payloads surface as
/// [`CoreError::UpstreamData`](crate::CoreError::UpstreamData).
pub trait CatalogService: Send + Sync {
    /// The track the user is listening to right now, if any.
    fn currently_playing(&self) -> impl Future<Output = Result<Option<Track>>> + Send;

    fn track(&self, id: &TrackId) -> impl Future<Output = Result<Track>> + Send;

    fn tracks(&self, ids: &[TrackId]) -> impl Future<Output = Result<Vec<Track>>> + Send;

    /// Features for each id, in the same order as `ids`.
    fn audio_features(
        &self,
        ids: &[TrackId],
    ) -> impl Future<Output = Result<Vec<AudioFeatures>>> + Send;

    fn audio_analysis(&self, id: &TrackId) -> impl Future<Output = Result<AudioAnalysis>> + Send;

    fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> impl Future<Output = Result<Vec<Track>>> + Send;

    /// Most recently played tracks, newest first.
    fn recently_played(&self, limit: u32) -> impl Future<Output = Result<Vec<Track>>> + Send;
}
