//! Soundwave generation from Spotify audio analysis segments.
//!
//! Each segment's peak loudness is mapped onto a perceptual score in [0, 1],
//! then sampled at `WAVEFORM_RESOLUTION` evenly spaced positions and
//! normalized against the loudest segment.

use crate::CatalogService;
use crate::CoreError;
use crate::TrackId;
use crate::error::Result;
use crate::model::AnalysisSegment;
use serde::Serialize;
use tracing::debug;

/// Number of samples in every waveform.
pub const WAVEFORM_RESOLUTION: usize = 1000;
/// Segments at or below this peak loudness (dB) score zero.
pub const LOUDNESS_FLOOR_DB: f64 = -35.0;

/// Exactly `WAVEFORM_RESOLUTION` levels in [0, 1]; index i is position i/1000.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WaveformLevels(Vec<f64>);

impl WaveformLevels {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

/// Map a peak loudness in dB onto [0, 1]; louder is higher.
pub fn perceptual_score(loudness_max: f64) -> f64 {
    1.0 - loudness_max.clamp(LOUDNESS_FLOOR_DB, 0.0) / LOUDNESS_FLOOR_DB
}

/// A segment normalized against the track duration.
struct Span {
    end: f64,
    score: f64,
}

/// Resample analysis segments into a fixed-size normalized waveform.
///
/// Each position takes the first segment, in the given order, whose end is at
/// or after it. Positions past every segment end repeat the previous level.
pub fn resample(segments: &[AnalysisSegment], track_duration_ms: f64) -> Result<WaveformLevels> {
    if segments.is_empty() {
        return Err(CoreError::EmptySegments);
    }
    if !track_duration_ms.is_finite() || track_duration_ms <= 0.0 {
        return Err(CoreError::InvalidDuration(track_duration_ms));
    }
    let duration = track_duration_ms / 1000.0;

    let mut spans = Vec::with_capacity(segments.len());
    let mut max_loudness = 0.0_f64;
    for (index, segment) in segments.iter().enumerate() {
        validate_segment(index, segment)?;
        let score = perceptual_score(segment.loudness_max);
        max_loudness = max_loudness.max(score);
        spans.push(Span {
            end: segment.start / duration + segment.duration / duration,
            score,
        });
    }
    if max_loudness <= 0.0 {
        return Err(CoreError::SilentTrack);
    }

    // The first span ending at or after p never moves backwards as p grows,
    // so one forward pointer finds it for every position.
    let mut levels: Vec<f64> = Vec::with_capacity(WAVEFORM_RESOLUTION);
    let mut cursor = 0;
    let mut gaps = 0;
    for i in 0..WAVEFORM_RESOLUTION {
        let position = i as f64 / WAVEFORM_RESOLUTION as f64;
        while cursor < spans.len() && spans[cursor].end < position {
            cursor += 1;
        }
        let level = match spans.get(cursor) {
            Some(span) => (span.score / max_loudness * 100.0).round() / 100.0,
            None => {
                gaps += 1;
                levels.last().copied().unwrap_or(0.0)
            }
        };
        levels.push(level);
    }

    if gaps > 0 {
        debug!("{gaps} waveform positions fell past the last segment; carried forward");
    }

    Ok(WaveformLevels(levels))
}

fn validate_segment(index: usize, segment: &AnalysisSegment) -> Result<()> {
    let reason = if !segment.start.is_finite() || segment.start < 0.0 {
        format!("start {} is not a non-negative number", segment.start)
    } else if !segment.duration.is_finite() || segment.duration <= 0.0 {
        format!("duration {} is not positive", segment.duration)
    } else if segment.loudness_max.is_nan() {
        "loudness_max is NaN".to_string()
    } else {
        return Ok(());
    };
    Err(CoreError::InvalidSegment { index, reason })
}

/// Fetch a track's audio analysis and turn it into a soundwave.
pub async fn track_soundwave<C: CatalogService>(
    catalog: &C,
    track_id: &TrackId,
) -> Result<WaveformLevels> {
    let analysis = catalog.audio_analysis(track_id).await?;
    debug!(
        "Resampling {} segments for {}",
        analysis.segments.len(),
        track_id
    );
    resample(&analysis.segments, analysis.track_duration_ms)
}
