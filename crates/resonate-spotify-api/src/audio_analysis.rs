use serde::Deserialize;
use serde::Serialize;

/// https://developer.spotify.com/documentation/web-api/reference/get-audio-analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    pub track: AnalysisTrack,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisTrack {
    /// Seconds.
    pub duration: f64,
    pub loudness: Option<f64>,
    pub tempo: Option<f64>,
}

/// Times in seconds, loudness in dB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub duration: f64,
    pub confidence: Option<f64>,
    pub loudness_start: Option<f64>,
    pub loudness_max: f64,
    pub loudness_max_time: Option<f64>,
    pub loudness_end: Option<f64>,
}
