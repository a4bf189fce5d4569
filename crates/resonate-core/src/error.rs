//! Error type shared by every core operation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// No analysis segments were supplied to the resampler
    #[error("audio analysis contains no segments")]
    EmptySegments,

    /// Track duration was zero, negative or not a number
    #[error("invalid track duration: {0} ms")]
    InvalidDuration(f64),

    /// A segment with a negative start or a non-positive duration
    #[error("invalid analysis segment at index {index}: {reason}")]
    InvalidSegment { index: usize, reason: String },

    /// Feature aggregation needs at least one record
    #[error("cannot aggregate an empty set of audio features")]
    EmptyFeatureSet,

    /// Every segment sits at or below the loudness floor, so there is no peak to normalize against
    #[error("every segment is at or below the loudness floor; waveform has no peak")]
    SilentTrack,

    /// Missing, mistyped or inconsistent data from the catalog service
    #[error("upstream data error: {0}")]
    UpstreamData(String),

    /// Nothing is playing and no track id was supplied
    #[error("no track is currently playing")]
    NoActiveTrack,

    /// Neither a playing track nor any play history to seed from
    #[error("no seed tracks available: nothing playing and no play history")]
    NoSeedTracks,

    /// The catalog service could not be reached or rejected the request
    #[error("upstream request failed: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification callers use to decide between retrying and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Precondition,
    Domain,
    UpstreamData,
    /// Nothing to work from yet; expected for an idle or brand-new account.
    NoActiveTrack,
    Upstream,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::EmptySegments
            | CoreError::InvalidDuration(_)
            | CoreError::InvalidSegment { .. }
            | CoreError::EmptyFeatureSet => ErrorKind::Precondition,
            CoreError::SilentTrack => ErrorKind::Domain,
            CoreError::UpstreamData(_) => ErrorKind::UpstreamData,
            CoreError::NoActiveTrack | CoreError::NoSeedTracks => ErrorKind::NoActiveTrack,
            CoreError::Upstream(_) => ErrorKind::Upstream,
        }
    }

    pub fn upstream_data(message: impl Into<String>) -> Self {
        CoreError::UpstreamData(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
