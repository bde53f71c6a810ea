//! Library endpoints against a mock Web API

mod common;

use common::{client_for, error_json};
use pmospotify::{CancellationToken, Error, Uri};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn two_uris() -> Vec<Uri> {
    vec![
        Uri::from("spotify:track:4iV5W9uYEdYUVa79Axb7Rh"),
        Uri::from("spotify:album:1301WleyT98MSxVHPZCA6M"),
    ]
}

#[tokio::test]
async fn test_save_to_library() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/me/library"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "uris": ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh", "spotify:album:1301WleyT98MSxVHPZCA6M"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.save_to_library(&two_uris()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["uris"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_save_to_library_failure() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/me/library"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_json(401, "Invalid access token")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .save_to_library(&[Uri::from("spotify:track:4iV5W9uYEdYUVa79Axb7Rh")])
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Spotify API error (401): Invalid access token");
}

#[tokio::test]
async fn test_save_to_library_with_cancelled_token() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    token.cancel();
    let client = client_for(&server).with_cancellation(token);

    let err = client
        .save_to_library(&[Uri::from("spotify:track:4iV5W9uYEdYUVa79Axb7Rh")])
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/me/library"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let client = client_for(&server).with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let started = std::time::Instant::now();
    let err = client.remove_from_library(&two_uris()).await.unwrap_err();
    canceller.await.unwrap();

    assert!(matches!(err, Error::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_remove_from_library() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/me/library"))
        .and(body_json(json!({
            "uris": ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh", "spotify:album:1301WleyT98MSxVHPZCA6M"]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.remove_from_library(&two_uris()).await.unwrap();
}

#[tokio::test]
async fn test_user_has_saved_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/library/contains"))
        .and(query_param(
            "uris",
            "spotify:track:0udZHhCi7p1YzMlvI4fXoK,spotify:track:55nlbqqFVnSsArIeYSQlqx",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("[ false, true ]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let contains = client
        .user_has_saved_items(&[
            Uri::from("spotify:track:0udZHhCi7p1YzMlvI4fXoK"),
            Uri::from("spotify:track:55nlbqqFVnSsArIeYSQlqx"),
        ])
        .await
        .unwrap();

    assert_eq!(contains, vec![false, true]);
}

#[tokio::test]
async fn test_user_has_saved_items_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/library/contains"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .user_has_saved_items(&[Uri::from("spotify:track:0udZHhCi7p1YzMlvI4fXoK")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoContent));
}

#[tokio::test]
async fn test_empty_uri_list_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for err in [
        client.save_to_library(&[]).await.unwrap_err(),
        client.remove_from_library(&[]).await.unwrap_err(),
        client.user_has_saved_items(&[]).await.unwrap_err(),
    ] {
        match err {
            Error::InvalidInput(message) => assert_eq!(message, "at least one URI is required"),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }
}
