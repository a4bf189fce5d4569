use serde::Deserialize;
use serde::Serialize;
use std::ops::Deref;

/// Spotify base-62 track id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub String);
impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Deref for TrackId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl AsRef<str> for TrackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        TrackId(value.to_string())
    }
}
impl From<String> for TrackId {
    fn from(value: String) -> Self {
        TrackId(value)
    }
}
