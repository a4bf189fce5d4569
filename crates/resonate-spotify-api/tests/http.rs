mod common;

use common::StubResponse;
use common::StubServer;
use common::features_json;
use common::ids_param;
use common::track_json;
use resonate_core::CatalogService;
use resonate_core::CoreError;
use resonate_core::ErrorKind;
use resonate_core::TrackId;
use resonate_core::recommend::recommend_for_track;
use serde_json::json;

fn numbered_ids(count: usize) -> Vec<TrackId> {
    (0..count).map(|i| TrackId(format!("id{i:03}"))).collect()
}

#[tokio::test]
async fn idle_player_is_nothing_playing() {
    let server = StubServer::spawn(|_| StubResponse::status(204)).await;
    let client = server.client();

    assert!(client.currently_playing().await.unwrap().is_none());

    let err = recommend_for_track(&client, None, 5).await.unwrap_err();
    assert!(matches!(err, CoreError::NoActiveTrack));
    assert_eq!(server.requests()[0].path(), "/v1/me/player/currently-playing");
}

#[tokio::test]
async fn empty_body_is_nothing_playing() {
    let server = StubServer::spawn(|_| StubResponse::status(200)).await;
    let client = server.client();

    assert!(client.get_currently_playing().await.unwrap().is_none());
    assert!(client.currently_playing().await.unwrap().is_none());
}

#[tokio::test]
async fn large_feature_lookups_are_paged_in_order() {
    let server = StubServer::spawn(|url| {
        let features: Vec<_> = ids_param(url).iter().map(|id| features_json(id)).collect();
        StubResponse::json(json!({ "audio_features": features }))
    })
    .await;
    let ids = numbered_ids(120);

    let features = server.client().audio_features(&ids).await.unwrap();

    let returned: Vec<TrackId> = features.into_iter().map(|f| f.id).collect();
    assert_eq!(returned, ids);
    let pages: Vec<usize> = server.requests().iter().map(|u| ids_param(u).len()).collect();
    assert_eq!(pages, [100, 20]);
    assert!(server.requests().iter().all(|u| u.path() == "/v1/audio-features"));
}

#[tokio::test]
async fn large_track_lookups_are_paged_in_order() {
    let server = StubServer::spawn(|url| {
        let tracks: Vec<_> = ids_param(url).iter().map(|id| track_json(id)).collect();
        StubResponse::json(json!({ "tracks": tracks }))
    })
    .await;
    let ids = numbered_ids(120);

    let tracks = server.client().tracks(&ids).await.unwrap();

    let returned: Vec<TrackId> = tracks.into_iter().map(|t| t.id).collect();
    assert_eq!(returned, ids);
    let pages: Vec<usize> = server.requests().iter().map(|u| ids_param(u).len()).collect();
    assert_eq!(pages, [50, 50, 20]);
}

#[tokio::test]
async fn missing_track_is_an_upstream_error() {
    let server = StubServer::spawn(|_| StubResponse::status(404)).await;

    let err = server.client().track(&TrackId::from("nope")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(server.requests()[0].path(), "/v1/tracks/nope");
}

#[tokio::test]
async fn malformed_body_is_an_upstream_data_error() {
    let server = StubServer::spawn(|_| StubResponse::json(json!({ "tracks": "nope" }))).await;

    let err = server.client().tracks(&numbered_ids(2)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UpstreamData);
}
