use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::playlist_song, repositories::PlaylistSongRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct PlaylistSongPayload {
    pub playlist_id: i32,
    pub song_id: i32,
}

pub async fn list_playlist_songs(
    State(state): State<AppState>,
) -> Result<Json<Vec<playlist_song::Model>>> {
    let entries = PlaylistSongRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(entries))
}

pub async fn list_by_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<i32>,
) -> Result<Json<Vec<playlist_song::Model>>> {
    let entries = PlaylistSongRepository::new(state.db.clone())
        .find_by_playlist_id(playlist_id)
        .await?;
    Ok(Json(entries))
}

pub async fn list_by_song(
    State(state): State<AppState>,
    Path(song_id): Path<i32>,
) -> Result<Json<Vec<playlist_song::Model>>> {
    let entries = PlaylistSongRepository::new(state.db.clone())
        .find_by_song_id(song_id)
        .await?;
    Ok(Json(entries))
}

pub async fn add_song_to_playlist(
    State(state): State<AppState>,
    Json(payload): Json<PlaylistSongPayload>,
) -> Result<Json<playlist_song::Model>> {
    validation::ensure_playlist_exists(&state.db, payload.playlist_id).await?;
    validation::ensure_song_exists(&state.db, payload.song_id).await?;

    let repo = PlaylistSongRepository::new(state.db.clone());
    if repo.exists_pair(payload.playlist_id, payload.song_id).await? {
        return Err(AppError::Validation(
            "Song is already in this playlist".to_string(),
        ));
    }

    let entry = playlist_song::ActiveModel {
        playlist_id: Set(payload.playlist_id),
        song_id: Set(payload.song_id),
        added_at: Set(Utc::now().into()),
    };

    let created = repo.create(entry).await?;
    Ok(Json(created))
}

pub async fn remove_song_from_playlist(
    State(state): State<AppState>,
    Path((playlist_id, song_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    PlaylistSongRepository::new(state.db.clone())
        .delete_pair(playlist_id, song_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
