use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::artist, repositories::ArtistRepository},
    error::{AppError, Result},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ArtistPayload {
    pub name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<artist::Model>>> {
    let artists = ArtistRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(artists))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<artist::Model>> {
    let artist = ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;
    Ok(Json(artist))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<ArtistPayload>,
) -> Result<Json<artist::Model>> {
    let artist = artist::ActiveModel {
        name: Set(payload.name),
        bio: Set(payload.bio),
        country: Set(payload.country),
        birth_date: Set(payload.birth_date),
        ..Default::default()
    };

    let created = ArtistRepository::new(state.db.clone()).create(artist).await?;
    Ok(Json(created))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ArtistPayload>,
) -> Result<Json<artist::Model>> {
    let repo = ArtistRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let mut artist: artist::ActiveModel = existing.into();
    artist.name = Set(payload.name);
    artist.bio = Set(payload.bio);
    artist.country = Set(payload.country);
    artist.birth_date = Set(payload.birth_date);

    let updated = repo.update(artist).await?;
    Ok(Json(updated))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    ArtistRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
