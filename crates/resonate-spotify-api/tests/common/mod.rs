//! Local HTTP stand-in for the Spotify Web API.
//!
//! Every request is answered by a handler closure and recorded, so tests can
//! check both what the client decoded and what it asked for.

use resonate_spotify_api::SpotifyClient;
use resonate_spotify_api::bearer_token::BearerToken;
use resonate_spotify_api::config::SpotifyConfig;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use url::Url;

pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

pub struct StubServer {
    pub api_base: Url,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl StubServer {
    pub async fn spawn<F>(handler: F) -> Self
    where
        F: Fn(&Url) -> StubResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let handler = Arc::new(handler);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let handler = handler.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let Some(url) = read_request_url(&mut socket, port).await else {
                        return;
                    };
                    recorded.lock().unwrap().push(url.clone());
                    let response = render(&handler(&url));
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            api_base: Url::parse(&format!("http://127.0.0.1:{port}/v1/")).unwrap(),
            requests,
        }
    }

    pub fn client(&self) -> SpotifyClient {
        let config = SpotifyConfig {
            client_id: None,
            redirect_uri: None,
            api_base: self.api_base.clone(),
            token_file: PathBuf::from("unused_token.json"),
        };
        SpotifyClient::new(&config, BearerToken("test-token".into()))
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

/// Comma-separated `ids` query parameter of a request.
pub fn ids_param(url: &Url) -> Vec<String> {
    url.query_pairs()
        .find(|(k, _)| k == "ids")
        .map(|(_, v)| v.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn track_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "artists": [{ "id": "0gxyHStUsqpMadRV0Di1Qt", "name": "Rick Astley" }],
        "duration_ms": 213573,
        "id": id,
        "name": format!("Song {id}"),
        "preview_url": null
    })
}

pub fn features_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "acousticness": 0.14, "danceability": 0.727, "duration_ms": 213573,
        "energy": 0.939, "id": id, "instrumentalness": 0.0, "key": 8,
        "liveness": 0.151, "loudness": -11.855, "mode": 1, "speechiness": 0.0369,
        "tempo": 113.301, "time_signature": 4, "valence": 0.5
    })
}

async fn read_request_url(socket: &mut TcpStream, port: u16) -> Option<Url> {
    let mut head = Vec::new();
    let mut chunk = [0; 4096];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = socket.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        head.extend_from_slice(&chunk[..read]);
    }
    let head = String::from_utf8_lossy(&head);
    let target = head.split_whitespace().nth(1)?;
    Url::parse(&format!("http://127.0.0.1:{port}{target}")).ok()
}

fn render(response: &StubResponse) -> String {
    if response.status == 204 {
        return "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string();
    }
    let reason = match response.status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        _ => "Error",
    };
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    )
}
