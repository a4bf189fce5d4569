use crate::bearer_token::BearerToken;
use crate::bearer_token::SavedToken;
use crate::config::SCOPES;
use crate::config::SpotifyConfig;
use base64::Engine;
use eyre::OptionExt;
use eyre::Result;
use eyre::eyre;
use open::that as open_browser;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use std::path::Path;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tracing::debug;
use tracing::info;
use tracing::warn;
use url::Url;

const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// The cached token, if the file exists, parses and has not expired by `now`.
pub async fn get_saved_token(path: &Path, now: u64) -> Result<Option<BearerToken>> {
    let Ok(bytes) = tokio::fs::read(path).await else {
        return Ok(None);
    };
    let saved: SavedToken = match serde_json::from_slice(&bytes) {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Ignoring unreadable token cache {}: {}", path.display(), e);
            return Ok(None);
        }
    };
    if !saved.is_fresh(now) {
        info!("Cached token expired, authorizing again");
        return Ok(None);
    }
    Ok(Some(saved.bearer))
}

pub async fn save_token(path: &Path, token: &SavedToken) -> Result<()> {
    tokio::fs::write(path, serde_json::to_string_pretty(token)?).await?;
    Ok(())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Reuse the cached token, or run the PKCE flow in the browser and cache the result.
pub async fn get_bearer_token_via_pkce(config: &SpotifyConfig) -> Result<BearerToken> {
    debug!("Getting bearer token");
    if let Some(x) = get_saved_token(&config.token_file, unix_now()).await? {
        return Ok(x);
    }

    let client_id = config.client_id()?;
    let redirect_uri = config.redirect_uri()?;
    let verifier = generate_code_verifier();
    let challenge = code_challenge(&verifier);

    let auth_url = authorize_url(client_id, redirect_uri, &challenge)?;

    info!("Opening browser for auth");
    open_browser(auth_url.as_str())?;

    let code = listen_for_code(redirect_uri).await?;

    let client = reqwest::Client::new();
    let resp = client
        .post(TOKEN_URL)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", redirect_uri),
            ("client_id", client_id),
            ("code_verifier", verifier.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<TokenResponse>()
        .await?;

    debug!("Access Token: len={}", resp.access_token.len());
    debug!("Scope: {}", resp.scope);
    debug!("Expires in: {}s", resp.expires_in);

    let saved = SavedToken::new(BearerToken(resp.access_token), resp.expires_in, unix_now());
    save_token(&config.token_file, &saved).await?;

    Ok(saved.bearer)
}

fn authorize_url(client_id: &str, redirect_uri: &str, challenge: &str) -> Result<Url> {
    let scope = SCOPES.join(" ");
    Ok(Url::parse_with_params(
        AUTHORIZE_URL,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("code_challenge_method", "S256"),
            ("code_challenge", challenge),
            ("scope", scope.as_str()),
        ],
    )?)
}

fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

fn code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash)
}

/// Host and port the callback listener binds, taken from the redirect uri.
fn listen_addr(redirect_uri: &str) -> Result<&str> {
    let rest = redirect_uri
        .strip_prefix("http://")
        .or_else(|| redirect_uri.strip_prefix("https://"))
        .ok_or_eyre("Invalid redirect URI")?;
    Ok(rest.split('/').next().unwrap_or(rest))
}

fn extract_code(request: &str) -> Option<String> {
    request
        .split_whitespace()
        .nth(1)
        .and_then(|url| Url::parse(&format!("http://localhost{}", url)).ok())
        .and_then(|url| {
            url.query_pairs()
                .find(|(k, _)| k == "code")
                .map(|(_, v)| v.to_string())
        })
}

async fn listen_for_code(redirect_uri: &str) -> Result<String> {
    debug!("Listening for code on {}", redirect_uri);
    let listener = TcpListener::bind(listen_addr(redirect_uri)?).await?;
    let (mut socket, _) = listener.accept().await?;

    let mut buffer = [0; 1024];
    let read = socket.read(&mut buffer).await?;
    let request = String::from_utf8_lossy(&buffer[..read]);

    let code =
        extract_code(&request).ok_or_else(|| eyre!("Failed to extract code from request"))?;

    let body = r#"
        <!DOCTYPE html>
        <html lang="en">
          <head><meta charset="UTF-8"><title>Spotify Auth</title></head>
          <body style="font-family:sans-serif;text-align:center;padding-top:3em">
            <h1>Resonate</h1>
            <strong>Spotify auth complete.</strong><br/>You may close this window.
          </body>
        </html>
        "#;

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );

    socket.write_all(response.as_bytes()).await?;

    Ok(code)
}

#[derive(Debug, Deserialize, Serialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    scope: String,
    expires_in: u64,
    refresh_token: Option<String>,
}
