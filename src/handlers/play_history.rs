use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::play_history, repositories::PlayHistoryRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct PlayHistoryPayload {
    pub user_id: i32,
    pub song_id: i32,
}

pub async fn list_play_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<play_history::Model>>> {
    let entries = PlayHistoryRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(entries))
}

pub async fn get_play_history_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<play_history::Model>> {
    let entry = PlayHistoryRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Play history entry not found".to_string()))?;
    Ok(Json(entry))
}

/// Most recent plays first.
pub async fn list_play_history_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<play_history::Model>>> {
    let entries = PlayHistoryRepository::new(state.db.clone())
        .find_by_user_id(user_id)
        .await?;
    Ok(Json(entries))
}

pub async fn create_play_history_entry(
    State(state): State<AppState>,
    Json(payload): Json<PlayHistoryPayload>,
) -> Result<Json<play_history::Model>> {
    validation::ensure_user_exists(&state.db, payload.user_id).await?;
    validation::ensure_song_exists(&state.db, payload.song_id).await?;

    let entry = play_history::ActiveModel {
        user_id: Set(payload.user_id),
        song_id: Set(payload.song_id),
        played_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let created = PlayHistoryRepository::new(state.db.clone()).create(entry).await?;
    Ok(Json(created))
}

pub async fn delete_play_history_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    PlayHistoryRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
