//! Typed records passed between the catalog service and the core operations.
//!
//! Upstream records (`Track`, `AudioFeatures`, `AudioAnalysis`) are validated
//! when the catalog adapter builds them, so the core never deals with absent
//! fields. Derived records (`FormattedTrack`, `FeatureRange`) are what callers
//! serialize.

use crate::TrackId;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub artists: Vec<Artist>,
    pub title: String,
    pub duration_ms: u64,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: TrackId,
    pub tempo: f64,
    pub danceability: f64,
    pub energy: f64,
    pub loudness: f64,
    pub valence: f64,
}

/// One slice of a track's audio analysis, times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSegment {
    pub start: f64,
    pub duration: f64,
    pub loudness_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    pub track_duration_ms: f64,
    pub segments: Vec<AnalysisSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedFeatures {
    pub tempo: f64,
    pub danceability: f64,
    pub energy: f64,
    pub loudness: f64,
    pub mood: f64,
}

/// Public output shape of a track together with its features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTrack {
    pub id: TrackId,
    pub artists: Vec<String>,
    pub song: String,
    pub length_ms: u64,
    pub preview_url: Option<String>,
    pub features: FormattedFeatures,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Per-axis envelope over a set of audio features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange {
    pub tempo: DimensionRange,
    pub danceability: DimensionRange,
    pub energy: DimensionRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureTarget {
    pub target: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FeatureTarget {
    pub fn exact(value: f64) -> Self {
        Self {
            target: value,
            min: None,
            max: None,
        }
    }

    pub fn within(range: &DimensionRange) -> Self {
        Self {
            target: range.average,
            min: Some(range.min),
            max: Some(range.max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureTargets {
    pub tempo: FeatureTarget,
    pub danceability: FeatureTarget,
    pub energy: FeatureTarget,
}

impl FeatureTargets {
    /// Point targets taken straight from one track's features.
    pub fn exact(features: &AudioFeatures) -> Self {
        Self {
            tempo: FeatureTarget::exact(features.tempo),
            danceability: FeatureTarget::exact(features.danceability),
            energy: FeatureTarget::exact(features.energy),
        }
    }

    /// Average as target, bounded by min and max.
    pub fn within(range: &FeatureRange) -> Self {
        Self {
            tempo: FeatureTarget::within(&range.tempo),
            danceability: FeatureTarget::within(&range.danceability),
            energy: FeatureTarget::within(&range.energy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub seed_track_ids: Vec<TrackId>,
    pub limit: u32,
    pub targets: Option<FeatureTargets>,
}

impl RecommendationRequest {
    pub fn new(seed_track_ids: Vec<TrackId>, limit: u32) -> Self {
        Self {
            seed_track_ids,
            limit,
            targets: None,
        }
    }

    pub fn with_targets(mut self, targets: FeatureTargets) -> Self {
        self.targets = Some(targets);
        self
    }
}
