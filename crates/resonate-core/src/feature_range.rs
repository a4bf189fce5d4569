use crate::CoreError;
use crate::error::Result;
use crate::model::AudioFeatures;
use crate::model::DimensionRange;
use crate::model::FeatureRange;

/// Min, max and average of tempo, danceability and energy, each independently.
pub fn aggregate(features: &[AudioFeatures]) -> Result<FeatureRange> {
    if features.is_empty() {
        return Err(CoreError::EmptyFeatureSet);
    }
    Ok(FeatureRange {
        tempo: dimension(features, |f| f.tempo),
        danceability: dimension(features, |f| f.danceability),
        energy: dimension(features, |f| f.energy),
    })
}

fn dimension(
    features: &[AudioFeatures],
    project: impl Fn(&AudioFeatures) -> f64,
) -> DimensionRange {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for value in features.iter().map(project) {
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }
    DimensionRange {
        min,
        max,
        average: sum / features.len() as f64,
    }
}
