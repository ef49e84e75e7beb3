//! Integration tests for song handler routes
//!
//! Tests the combined search/genre filter, relation validation on
//! create/update, and the no-artist special case query.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::util::ServiceExt;

use melodex::handlers;
use melodex::state::AppState;
use melodex::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes())
        .with_state(state.clone())
}

async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_list_songs_empty() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get_request("/api/songs")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_songs_filter_by_search_term() {
    let state = setup_test_app_state().await;

    create_test_song(&state.db, "Abcdef", None, None, None).await;
    create_test_song(&state.db, "xyz ABC", None, None, None).await;
    create_test_song(&state.db, "Other", None, None, None).await;

    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(get_request("/api/songs?searchTerm=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Without the filter everything comes back
    let response = app.oneshot(get_request("/api/songs")).await.unwrap();
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_songs_filter_by_genre() {
    let state = setup_test_app_state().await;

    let rock = create_test_genre(&state.db, "Rock").await;
    create_test_song(&state.db, "Riff", None, None, Some(rock.id)).await;
    create_test_song(&state.db, "Genreless", None, None, None).await;

    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/songs?genre={}", rock.id)))
        .await
        .unwrap();
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Riff");

    // "unknown" and "-1" both select songs that have no genre
    for selector in ["unknown", "-1"] {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/songs?genre={}", selector)))
            .await
            .unwrap();
        let body: serde_json::Value = parse_json_response(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["title"], "Genreless");
    }
}

#[tokio::test]
async fn test_list_songs_invalid_genre_selector() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(get_request("/api/songs?genre=heavy"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_song_minimal() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/songs",
            json!({ "title": "Standalone" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["title"], "Standalone");
    assert_eq!(body["artist_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_song_with_dangling_genre() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/songs",
            json!({ "title": "Bad Genre", "genre_id": 999 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_song_revalidates_relations() {
    let state = setup_test_app_state().await;

    let song = create_test_song(&state.db, "Mutable", None, None, None).await;
    let app = create_test_router(&state);

    // A dangling album id is rejected
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/songs/{}", song.id),
            json!({ "title": "Mutable", "album_id": 4242 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A valid payload goes through
    let artist = create_test_artist(&state.db, "New Owner").await;
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/songs/{}", song.id),
            json!({ "title": "Renamed", "artist_id": artist.id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["artist_id"], artist.id);
}

#[tokio::test]
async fn test_update_song_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/songs/999",
            json!({ "title": "Ghost" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_song() {
    let state = setup_test_app_state().await;

    let song = create_test_song(&state.db, "Short-lived", None, None, None).await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/songs/{}", song.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request(&format!("/api/songs/{}", song.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_songs_without_artist_route() {
    let state = setup_test_app_state().await;

    let artist = create_test_artist(&state.db, "Known").await;
    let jazz = create_test_genre(&state.db, "Jazz").await;
    create_test_song(&state.db, "Orphaned", None, None, Some(jazz.id)).await;
    create_test_song(&state.db, "Owned", Some(artist.id), None, Some(jazz.id)).await;
    create_test_song(&state.db, "Bare", None, None, None).await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(get_request("/api/songs/no-artist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Orphaned");
}

#[tokio::test]
async fn test_songs_by_album_route() {
    let state = setup_test_app_state().await;

    let artist = create_test_artist(&state.db, "Albumist").await;
    let album = create_test_album(&state.db, artist.id, "Collection").await;
    create_test_song(&state.db, "On Album", Some(artist.id), Some(album.id), None).await;
    create_test_song(&state.db, "Single", Some(artist.id), None, None).await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(get_request(&format!("/api/songs/album/{}", album.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "On Album");
}
