//! Integration tests for album handler routes
//!
//! Tests CRUD plus artist foreign-key validation and the albums-by-artist
//! relationship query.

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
async fn test_create_album_with_missing_artist() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/albums",
            json!({ "title": "No Parent", "artist_id": 999 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_album_with_valid_artist() {
    let state = setup_test_app_state().await;

    let artist = create_test_artist(&state.db, "Builder").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/albums",
            json!({ "title": "First Release", "artist_id": artist.id }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["title"], "First Release");
    assert_eq!(body["artist_id"], artist.id);
}

#[tokio::test]
async fn test_get_after_post_returns_same_album() {
    let state = setup_test_app_state().await;

    let artist = create_test_artist(&state.db, "Round Trip").await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/albums",
            json!({
                "title": "Echo",
                "artist_id": artist.id,
                "release_date": "2020-05-17",
                "cover_image": "echo.png"
            }),
        ))
        .await
        .unwrap();
    let created: serde_json::Value = parse_json_response(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(get_request(&format!("/api/albums/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: serde_json::Value = parse_json_response(response).await;

    assert_eq!(fetched, created);
    assert_eq!(fetched["release_date"], "2020-05-17");
}

#[tokio::test]
async fn test_get_album_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get_request("/api/albums/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_album() {
    let state = setup_test_app_state().await;

    let artist = create_test_artist(&state.db, "Original").await;
    let other = create_test_artist(&state.db, "Replacement").await;
    let album = create_test_album(&state.db, artist.id, "Working Title").await;
    let app = create_test_router(&state);

    // Updating against a missing album is NotFound
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/albums/999",
            json!({ "title": "Ghost", "artist_id": artist.id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A dangling artist id is rejected
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/albums/{}", album.id),
            json!({ "title": "Working Title", "artist_id": 999 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Valid update reassigns the artist
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/albums/{}", album.id),
            json!({ "title": "Final Title", "artist_id": other.id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["title"], "Final Title");
    assert_eq!(body["artist_id"], other.id);
}

#[tokio::test]
async fn test_delete_album() {
    let state = setup_test_app_state().await;

    let artist = create_test_artist(&state.db, "Fleeting").await;
    let album = create_test_album(&state.db, artist.id, "Gone Soon").await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/albums/{}", album.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again is NotFound
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/albums/{}", album.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_albums_by_artist() {
    let state = setup_test_app_state().await;

    let prolific = create_test_artist(&state.db, "Prolific").await;
    let quiet = create_test_artist(&state.db, "Quiet").await;
    create_test_album(&state.db, prolific.id, "One").await;
    create_test_album(&state.db, prolific.id, "Two").await;
    create_test_album(&state.db, quiet.id, "Only").await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(get_request(&format!("/api/albums/artist/{}", prolific.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
