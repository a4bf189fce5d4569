use eyre::Result;
use eyre::WrapErr;
use eyre::eyre;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1/";
pub const DEFAULT_TOKEN_FILE: &str = "bearer_token.json";

/// Permissions requested during authorization.
pub const SCOPES: [&str; 6] = [
    "user-top-read",
    "playlist-read-private",
    "user-read-private",
    "user-read-playback-state",
    "user-read-recently-played",
    "user-read-currently-playing",
];

#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// `SPOTIFY_CLIENT_ID`; only needed when no cached token exists.
    pub client_id: Option<String>,
    /// `SPOTIFY_REDIRECT_URI`; only needed when no cached token exists.
    pub redirect_uri: Option<String>,
    /// `SPOTIFY_API_BASE`
    pub api_base: Url,
    /// `RESONATE_TOKEN_FILE`
    pub token_file: PathBuf,
}

impl SpotifyConfig {
    pub fn from_env() -> Result<Self> {
        let api_base =
            std::env::var("SPOTIFY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Ok(Self {
            client_id: std::env::var("SPOTIFY_CLIENT_ID").ok(),
            redirect_uri: std::env::var("SPOTIFY_REDIRECT_URI").ok(),
            api_base: parse_api_base(&api_base)?,
            token_file: std::env::var("RESONATE_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE)),
        })
    }

    pub fn client_id(&self) -> Result<&str> {
        self.client_id
            .as_deref()
            .ok_or_else(|| eyre!("Missing env var: SPOTIFY_CLIENT_ID"))
    }

    pub fn redirect_uri(&self) -> Result<&str> {
        self.redirect_uri
            .as_deref()
            .ok_or_else(|| eyre!("Missing env var: SPOTIFY_REDIRECT_URI"))
    }
}

/// Endpoint paths are joined relative to the base, so it must end in `/`.
pub fn parse_api_base(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).wrap_err_with(|| format!("Invalid SPOTIFY_API_BASE: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_gets_trailing_slash() {
        let base = parse_api_base("http://127.0.0.1:9000/v1").unwrap();
        assert_eq!(base.as_str(), "http://127.0.0.1:9000/v1/");
        assert_eq!(
            base.join("tracks/abc").unwrap().as_str(),
            "http://127.0.0.1:9000/v1/tracks/abc"
        );
    }

    #[test]
    fn api_base_must_be_a_url() {
        assert!(parse_api_base("not a url").is_err());
    }

    #[test]
    fn missing_credentials_are_reported() {
        let config = SpotifyConfig {
            client_id: None,
            redirect_uri: None,
            api_base: parse_api_base(DEFAULT_API_BASE).unwrap(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        };
        assert!(config.client_id().is_err());
        assert!(config.redirect_uri().is_err());
        assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
    }
}
