//! Shared helpers for the pmospotify integration tests

#![allow(dead_code)]

use pmospotify::SpotifyClient;
use serde_json::Value;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

/// Load a JSON fixture from `tests/data`
pub fn fixture(name: &str) -> Value {
    let path = format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {}", path, e));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("invalid fixture {}: {}", path, e))
}

/// Client pointed at the mock server, authenticated with [`TEST_TOKEN`]
pub fn client_for(server: &MockServer) -> SpotifyClient {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("pmospotify=debug")
        .try_init();

    SpotifyClient::builder()
        .base_url(server.uri())
        .access_token(TEST_TOKEN)
        .build()
        .unwrap()
}

/// Query string of the single request received by the mock server
pub async fn only_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().map(str::to_string)
}

/// A simple artist object
pub fn simple_artist_json(id: &str, name: &str) -> Value {
    serde_json::json!({
        "external_urls": { "spotify": format!("https://open.spotify.com/artist/{}", id) },
        "href": format!("https://api.spotify.com/v1/artists/{}", id),
        "id": id,
        "name": name,
        "type": "artist",
        "uri": format!("spotify:artist:{}", id)
    })
}

/// A full artist object, as returned by the follow and top endpoints
pub fn full_artist_json(id: &str, name: &str, followers: u32) -> Value {
    let mut artist = simple_artist_json(id, name);
    let extra = serde_json::json!({
        "followers": { "href": null, "total": followers },
        "genres": ["swedish hip hop"],
        "images": [
            { "height": 640, "url": "https://i.scdn.co/image/2c8c0cea05bf3d3c070b7498d8d0b957c4cdec20", "width": 640 },
            { "height": 64, "url": "https://i.scdn.co/image/ca9df7225ade6e5dfc62e7076709ca3409a7cbbf", "width": 64 }
        ],
        "popularity": 54
    });
    if let (Some(a), Some(e)) = (artist.as_object_mut(), extra.as_object()) {
        a.extend(e.clone());
    }
    artist
}

/// The Web API error envelope
pub fn error_json(status: u16, message: &str) -> Value {
    serde_json::json!({ "error": { "status": status, "message": message } })
}
