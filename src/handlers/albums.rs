use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::album, repositories::AlbumRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct AlbumPayload {
    pub title: String,
    pub artist_id: i32,
    pub release_date: Option<NaiveDate>,
    pub cover_image: Option<String>,
}

pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<album::Model>>> {
    let albums = AlbumRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(albums))
}

pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<album::Model>> {
    let album = AlbumRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;
    Ok(Json(album))
}

pub async fn list_albums_by_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Json<Vec<album::Model>>> {
    let albums = AlbumRepository::new(state.db.clone())
        .find_by_artist_id(artist_id)
        .await?;
    Ok(Json(albums))
}

pub async fn create_album(
    State(state): State<AppState>,
    Json(payload): Json<AlbumPayload>,
) -> Result<Json<album::Model>> {
    validation::ensure_artist_exists(&state.db, payload.artist_id).await?;

    let album = album::ActiveModel {
        title: Set(payload.title),
        artist_id: Set(payload.artist_id),
        release_date: Set(payload.release_date),
        cover_image: Set(payload.cover_image),
        ..Default::default()
    };

    let created = AlbumRepository::new(state.db.clone()).create(album).await?;
    Ok(Json(created))
}

pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AlbumPayload>,
) -> Result<Json<album::Model>> {
    let repo = AlbumRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;

    validation::ensure_artist_exists(&state.db, payload.artist_id).await?;

    let mut album: album::ActiveModel = existing.into();
    album.title = Set(payload.title);
    album.artist_id = Set(payload.artist_id);
    album.release_date = Set(payload.release_date);
    album.cover_image = Set(payload.cover_image);

    let updated = repo.update(album).await?;
    Ok(Json(updated))
}

pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    AlbumRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
