use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::synced_lyric, repositories::SyncedLyricRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct SyncedLyricPayload {
    pub song_id: i32,
    pub timestamp_seconds: i32,
    pub line: Option<String>,
}

pub async fn list_synced_lyrics(
    State(state): State<AppState>,
) -> Result<Json<Vec<synced_lyric::Model>>> {
    let lyrics = SyncedLyricRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(lyrics))
}

pub async fn get_synced_lyric(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<synced_lyric::Model>> {
    let lyric = SyncedLyricRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Synced lyric not found".to_string()))?;
    Ok(Json(lyric))
}

/// Lines for a song, ordered by timestamp for playback.
pub async fn list_synced_lyrics_by_song(
    State(state): State<AppState>,
    Path(song_id): Path<i32>,
) -> Result<Json<Vec<synced_lyric::Model>>> {
    let lyrics = SyncedLyricRepository::new(state.db.clone())
        .find_by_song_id(song_id)
        .await?;
    Ok(Json(lyrics))
}

pub async fn create_synced_lyric(
    State(state): State<AppState>,
    Json(payload): Json<SyncedLyricPayload>,
) -> Result<Json<synced_lyric::Model>> {
    validation::ensure_song_exists(&state.db, payload.song_id).await?;

    let lyric = synced_lyric::ActiveModel {
        song_id: Set(payload.song_id),
        timestamp_seconds: Set(payload.timestamp_seconds),
        line: Set(payload.line),
        ..Default::default()
    };

    let created = SyncedLyricRepository::new(state.db.clone()).create(lyric).await?;
    Ok(Json(created))
}

pub async fn update_synced_lyric(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SyncedLyricPayload>,
) -> Result<Json<synced_lyric::Model>> {
    let repo = SyncedLyricRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Synced lyric not found".to_string()))?;

    validation::ensure_song_exists(&state.db, payload.song_id).await?;

    let mut lyric: synced_lyric::ActiveModel = existing.into();
    lyric.song_id = Set(payload.song_id);
    lyric.timestamp_seconds = Set(payload.timestamp_seconds);
    lyric.line = Set(payload.line);

    let updated = repo.update(lyric).await?;
    Ok(Json(updated))
}

pub async fn delete_synced_lyric(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    SyncedLyricRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
