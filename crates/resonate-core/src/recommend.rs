//! Recommendation pipelines.
//!
//! Both modes follow the same shape: pick seed tracks, fetch their audio
//! features, ask the catalog for recommendations, then fetch features for the
//! recommendations and format everything uniformly. Calls are issued in order
//! because each one depends on the previous result.

use crate::CatalogService;
use crate::CoreError;
use crate::TrackId;
use crate::error::Result;
use crate::feature_range::aggregate;
use crate::format::format_aligned;
use crate::format::format_track;
use crate::model::AudioFeatures;
use crate::model::FeatureRange;
use crate::model::FeatureTargets;
use crate::model::FormattedTrack;
use crate::model::RecommendationRequest;
use crate::model::Track;
use serde::Serialize;
use tracing::debug;
use tracing::info;

pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 5;
pub const DEFAULT_LOOKBACK_LIMIT: u32 = 3;
/// Upper bound on seed tracks in one recommendation query.
pub const MAX_SEED_TRACKS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRecommendations {
    pub current_track: FormattedTrack,
    pub recommendations: Vec<FormattedTrack>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRecommendations {
    pub recent_tracks: Vec<FormattedTrack>,
    pub recommendations: Vec<FormattedTrack>,
    /// Envelope of the seed features; kept for callers, not part of the response body.
    #[serde(skip)]
    pub feature_range: FeatureRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentOptions {
    /// How many recently played tracks to look back over.
    pub lookback_limit: u32,
    /// How many recommendations to return.
    pub rec_limit: u32,
    /// Also send the seed feature range as min/max/target constraints.
    /// Off by default: the query is seeded by track ids only.
    pub constrain_to_range: bool,
}

impl Default for RecentOptions {
    fn default() -> Self {
        Self {
            lookback_limit: DEFAULT_LOOKBACK_LIMIT,
            rec_limit: DEFAULT_RECOMMENDATION_LIMIT,
            constrain_to_range: false,
        }
    }
}

/// Recommend tracks similar to one track.
///
/// Without a `track_id`, the currently playing track is used; if nothing is
/// playing this fails with [`CoreError::NoActiveTrack`]. The query targets
/// that track's exact tempo, danceability and energy.
pub async fn recommend_for_track<C: CatalogService>(
    catalog: &C,
    track_id: Option<&TrackId>,
    limit: u32,
) -> Result<TrackRecommendations> {
    let current = match track_id {
        Some(id) => catalog.track(id).await?,
        None => catalog
            .currently_playing()
            .await?
            .ok_or(CoreError::NoActiveTrack)?,
    };
    debug!("Recommending from {} ({})", current.title, current.id);

    let current_features = single_features(catalog, &current.id).await?;
    let request = RecommendationRequest::new(vec![current.id.clone()], limit)
        .with_targets(FeatureTargets::exact(&current_features));
    let recommendations = recommend(catalog, &request).await?;

    Ok(TrackRecommendations {
        current_track: format_track(&current, &current_features)?,
        recommendations,
    })
}

/// Recommend tracks seeded by what the user is playing and played recently.
pub async fn recommend_from_recent<C: CatalogService>(
    catalog: &C,
    options: RecentOptions,
) -> Result<RecentRecommendations> {
    let current = catalog.currently_playing().await?;
    let recent = catalog.recently_played(options.lookback_limit).await?;
    let seeds = select_seeds(current, recent);
    if seeds.is_empty() {
        return Err(CoreError::NoSeedTracks);
    }
    info!("Seeding recommendations from {} tracks", seeds.len());

    let seed_ids: Vec<TrackId> = seeds.iter().map(|t| t.id.clone()).collect();
    let seed_features = catalog.audio_features(&seed_ids).await?;
    let feature_range = aggregate(&seed_features)?;
    debug!("Seed feature range: {:?}", feature_range);

    let mut request = RecommendationRequest::new(seed_ids, options.rec_limit);
    if options.constrain_to_range {
        request = request.with_targets(FeatureTargets::within(&feature_range));
    }
    let recommendations = recommend(catalog, &request).await?;

    Ok(RecentRecommendations {
        recent_tracks: format_aligned(&seeds, &seed_features)?,
        recommendations,
        feature_range,
    })
}

/// Currently playing track first, then history, capped at [`MAX_SEED_TRACKS`].
pub fn select_seeds(current: Option<Track>, recent: Vec<Track>) -> Vec<Track> {
    let mut seeds: Vec<Track> = current.into_iter().chain(recent).collect();
    seeds.truncate(MAX_SEED_TRACKS);
    seeds
}

/// Format tracks and their features for explicit ids.
pub async fn formatted_tracks<C: CatalogService>(
    catalog: &C,
    ids: &[TrackId],
) -> Result<Vec<FormattedTrack>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let tracks = catalog.tracks(ids).await?;
    let features = catalog.audio_features(ids).await?;
    format_aligned(&tracks, &features)
}

async fn recommend<C: CatalogService>(
    catalog: &C,
    request: &RecommendationRequest,
) -> Result<Vec<FormattedTrack>> {
    let tracks = catalog.recommendations(request).await?;
    debug!("Catalog returned {} recommendations", tracks.len());
    if tracks.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<TrackId> = tracks.iter().map(|t| t.id.clone()).collect();
    let features = catalog.audio_features(&ids).await?;
    format_aligned(&tracks, &features)
}

async fn single_features<C: CatalogService>(catalog: &C, id: &TrackId) -> Result<AudioFeatures> {
    catalog
        .audio_features(std::slice::from_ref(id))
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::upstream_data(format!("no audio features for {id}")))
}
