use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::lyric, repositories::LyricRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct LyricPayload {
    pub song_id: i32,
    pub content: String,
    pub language: Option<String>,
}

pub async fn list_lyrics(State(state): State<AppState>) -> Result<Json<Vec<lyric::Model>>> {
    let lyrics = LyricRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(lyrics))
}

pub async fn get_lyric(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<lyric::Model>> {
    let lyric = LyricRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Lyric not found".to_string()))?;
    Ok(Json(lyric))
}

/// All lyric versions stored for a song. A song with none yields 404.
pub async fn list_lyrics_by_song(
    State(state): State<AppState>,
    Path(song_id): Path<i32>,
) -> Result<Json<Vec<lyric::Model>>> {
    let lyrics = LyricRepository::new(state.db.clone())
        .find_by_song_id(song_id)
        .await?;
    if lyrics.is_empty() {
        return Err(AppError::NotFound("No lyrics found for song".to_string()));
    }
    Ok(Json(lyrics))
}

pub async fn create_lyric(
    State(state): State<AppState>,
    Json(payload): Json<LyricPayload>,
) -> Result<Json<lyric::Model>> {
    validation::ensure_song_exists(&state.db, payload.song_id).await?;

    let lyric = lyric::ActiveModel {
        song_id: Set(payload.song_id),
        content: Set(payload.content),
        language: Set(payload.language.unwrap_or_else(|| "English".to_string())),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let created = LyricRepository::new(state.db.clone()).create(lyric).await?;
    Ok(Json(created))
}

pub async fn update_lyric(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LyricPayload>,
) -> Result<Json<lyric::Model>> {
    let repo = LyricRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Lyric not found".to_string()))?;

    validation::ensure_song_exists(&state.db, payload.song_id).await?;

    let language = payload
        .language
        .unwrap_or_else(|| existing.language.clone());

    let mut lyric: lyric::ActiveModel = existing.into();
    lyric.song_id = Set(payload.song_id);
    lyric.content = Set(payload.content);
    lyric.language = Set(language);

    let updated = repo.update(lyric).await?;
    Ok(Json(updated))
}

pub async fn delete_lyric(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    LyricRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
