use crate::track::Track;
use resonate_core::model::FeatureTarget;
use resonate_core::model::RecommendationRequest;
use serde::Deserialize;
use serde::Serialize;

/// https://developer.spotify.com/documentation/web-api/reference/get-recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub seeds: Vec<RecommendationSeed>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSeed {
    #[serde(rename = "afterFilteringSize")]
    pub after_filtering_size: Option<i64>,
    #[serde(rename = "afterRelinkingSize")]
    pub after_relinking_size: Option<i64>,
    pub href: Option<String>,
    pub id: String,
    #[serde(rename = "initialPoolSize")]
    pub initial_pool_size: Option<i64>,
    #[serde(rename = "type")]
    pub type_field: String,
}

/// Query parameters for a recommendation request.
pub fn recommendation_query(request: &RecommendationRequest) -> Vec<(&'static str, String)> {
    let seeds = request
        .seed_track_ids
        .iter()
        .map(|id| id.0.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let mut query = vec![("seed_tracks", seeds), ("limit", request.limit.to_string())];
    if let Some(targets) = &request.targets {
        push_target(&mut query, TEMPO_KEYS, &targets.tempo);
        push_target(&mut query, DANCEABILITY_KEYS, &targets.danceability);
        push_target(&mut query, ENERGY_KEYS, &targets.energy);
    }
    query
}

type TargetKeys = [&'static str; 3];
const TEMPO_KEYS: TargetKeys = ["target_tempo", "min_tempo", "max_tempo"];
const DANCEABILITY_KEYS: TargetKeys = [
    "target_danceability",
    "min_danceability",
    "max_danceability",
];
const ENERGY_KEYS: TargetKeys = ["target_energy", "min_energy", "max_energy"];

fn push_target(query: &mut Vec<(&'static str, String)>, keys: TargetKeys, target: &FeatureTarget) {
    let [target_key, min_key, max_key] = keys;
    query.push((target_key, target.target.to_string()));
    if let Some(min) = target.min {
        query.push((min_key, min.to_string()));
    }
    if let Some(max) = target.max {
        query.push((max_key, max.to_string()));
    }
}
