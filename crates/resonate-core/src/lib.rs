pub mod catalog;
pub mod error;
pub mod feature_range;
pub mod format;
pub mod model;
pub mod recommend;
pub mod track_id;
pub mod waveform;

pub use catalog::CatalogService;
pub use error::CoreError;
pub use error::ErrorKind;
pub use track_id::TrackId;
