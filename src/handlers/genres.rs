use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::genre, repositories::GenreRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct GenrePayload {
    pub name: String,
}

pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<genre::Model>>> {
    let genres = GenreRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(genres))
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<genre::Model>> {
    let genre = GenreRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;
    Ok(Json(genre))
}

pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenrePayload>,
) -> Result<Json<genre::Model>> {
    validation::validate_genre_name_unique(&state.db, &payload.name, None).await?;

    let genre = genre::ActiveModel {
        name: Set(payload.name),
        ..Default::default()
    };

    let created = GenreRepository::new(state.db.clone()).create(genre).await?;
    Ok(Json(created))
}

pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GenrePayload>,
) -> Result<Json<genre::Model>> {
    let repo = GenreRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;

    validation::validate_genre_name_unique(&state.db, &payload.name, Some(id)).await?;

    let mut genre: genre::ActiveModel = existing.into();
    genre.name = Set(payload.name);

    let updated = repo.update(genre).await?;
    Ok(Json(updated))
}

pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    GenreRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
