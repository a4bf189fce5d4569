use crate::bearer_token::BearerToken;
use crate::config::SpotifyConfig;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use tracing::warn;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to deserialize response: {source}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    #[error("empty response from {0}")]
    Empty(String),
}

/// Authenticated handle on the Spotify Web API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    api_base: Url,
    bearer: BearerToken,
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig, bearer: BearerToken) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            bearer,
        }
    }

    /// GET `path` relative to the API base and decode the JSON body.
    pub async fn fetch<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.fetch_optional(path, query)
            .await?
            .ok_or_else(|| FetchError::Empty(path.to_string()))
    }

    /// Like [`fetch`](Self::fetch), but `204 No Content` or an empty body is `None`.
    pub async fn fetch_optional<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.api_base.join(path)?;
        debug!("GET {}", url);
        let res = self
            .http
            .get(url)
            .bearer_auth(&self.bearer.0)
            .query(query)
            .send()
            .await?;
        if res.status() == StatusCode::UNAUTHORIZED {
            warn!("Bearer token rejected; remove the cached token file to log in again");
        }
        let res = res.error_for_status()?;
        if res.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = res.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&body) {
            Ok(x) => Ok(Some(x)),
            Err(source) => {
                debug!("Failed to deserialize {}:\n{}", path, body);
                Err(FetchError::Decode { source, body })
            }
        }
    }
}
