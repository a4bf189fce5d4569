use serde::Deserialize;
use serde::Serialize;

/// Tokens this close to expiry are treated as already expired.
pub const EXPIRY_MARGIN_SECS: u64 = 60;

/// OAuth access token sent as `Authorization: Bearer`.
#[derive(Serialize, Deserialize, Clone)]
pub struct BearerToken(pub String);

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken(len={})", self.0.len())
    }
}

/// Cached token file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedToken {
    pub bearer: BearerToken,
    /// Unix seconds after which Spotify rejects the token.
    pub expires_at: u64,
}

impl SavedToken {
    pub fn new(bearer: BearerToken, expires_in: u64, now: u64) -> Self {
        Self {
            bearer,
            expires_at: now.saturating_add(expires_in),
        }
    }

    pub fn is_fresh(&self, now: u64) -> bool {
        now.saturating_add(EXPIRY_MARGIN_SECS) < self.expires_at
    }
}
