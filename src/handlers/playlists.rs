use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::playlist, repositories::PlaylistRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct PlaylistPayload {
    pub name: String,
    pub user_id: i32,
}

pub async fn list_playlists(
    State(state): State<AppState>,
) -> Result<Json<Vec<playlist::Model>>> {
    let playlists = PlaylistRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(playlists))
}

pub async fn get_playlist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<playlist::Model>> {
    let playlist = PlaylistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;
    Ok(Json(playlist))
}

pub async fn list_playlists_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<playlist::Model>>> {
    let playlists = PlaylistRepository::new(state.db.clone())
        .find_by_user_id(user_id)
        .await?;
    Ok(Json(playlists))
}

pub async fn create_playlist(
    State(state): State<AppState>,
    Json(payload): Json<PlaylistPayload>,
) -> Result<Json<playlist::Model>> {
    validation::validate_playlist(&state.db, &payload.name, payload.user_id).await?;

    let playlist = playlist::ActiveModel {
        name: Set(payload.name),
        user_id: Set(payload.user_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let created = PlaylistRepository::new(state.db.clone()).create(playlist).await?;
    Ok(Json(created))
}

pub async fn update_playlist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PlaylistPayload>,
) -> Result<Json<playlist::Model>> {
    let repo = PlaylistRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;

    validation::validate_playlist(&state.db, &payload.name, payload.user_id).await?;

    let mut playlist: playlist::ActiveModel = existing.into();
    playlist.name = Set(payload.name);
    playlist.user_id = Set(payload.user_id);

    let updated = repo.update(playlist).await?;
    Ok(Json(updated))
}

pub async fn delete_playlist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    PlaylistRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
