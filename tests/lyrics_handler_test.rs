//! Integration tests for lyric and synced-lyric routes
//!
//! Covers song foreign-key validation, the language default, the
//! 404-on-empty behavior of the lyrics-by-song query, and timestamp
//! ordering of synced lines.

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
async fn test_create_lyric_requires_existing_song() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/lyrics",
            json!({ "song_id": 999, "content": "words" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_lyric_defaults_language() {
    let state = setup_test_app_state().await;

    let song = create_test_song(&state.db, "Sung", None, None, None).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/lyrics",
            json!({ "song_id": song.id, "content": "first verse" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["language"], "English");
    assert!(body["created_at"].as_str().is_some());
}

#[tokio::test]
async fn test_lyrics_by_song() {
    let state = setup_test_app_state().await;

    let song = create_test_song(&state.db, "Verbose", None, None, None).await;
    let app = create_test_router(&state);

    // No lyrics stored yet: the scoped query is NotFound
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/lyrics/song/{}", song.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for (content, language) in [("english words", "English"), ("palabras", "Spanish")] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/lyrics",
                json!({ "song_id": song.id, "content": content, "language": language }),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(get_request(&format!("/api/lyrics/song/{}", song.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_lyric_keeps_language_when_omitted() {
    let state = setup_test_app_state().await;

    let song = create_test_song(&state.db, "Bilingual", None, None, None).await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/lyrics",
            json!({ "song_id": song.id, "content": "texte", "language": "French" }),
        ))
        .await
        .unwrap();
    let created: serde_json::Value = parse_json_response(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/lyrics/{}", id),
            json!({ "song_id": song.id, "content": "texte revisé" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["content"], "texte revisé");
    assert_eq!(body["language"], "French");
}

#[tokio::test]
async fn test_synced_lyrics_by_song_ordered() {
    let state = setup_test_app_state().await;

    let song = create_test_song(&state.db, "Karaoke", None, None, None).await;
    let app = create_test_router(&state);

    for (ts, line) in [(42, "later"), (3, "opening"), (17, "middle")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/synced-lyrics",
                json!({ "song_id": song.id, "timestamp_seconds": ts, "line": line }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(get_request(&format!("/api/synced-lyrics/song/{}", song.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;

    let timestamps: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["timestamp_seconds"].as_i64().unwrap())
        .collect();
    assert_eq!(timestamps, vec![3, 17, 42]);
}

#[tokio::test]
async fn test_create_synced_lyric_requires_existing_song() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/synced-lyrics",
            json!({ "song_id": 999, "timestamp_seconds": 10, "line": "nowhere" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_synced_lyric() {
    let state = setup_test_app_state().await;

    let song = create_test_song(&state.db, "Trimmed", None, None, None).await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/synced-lyrics",
            json!({ "song_id": song.id, "timestamp_seconds": 5, "line": "gone" }),
        ))
        .await
        .unwrap();
    let created: serde_json::Value = parse_json_response(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/synced-lyrics/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request(&format!("/api/synced-lyrics/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
