use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::user_favorite, repositories::UserFavoriteRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct FavoritePayload {
    pub user_id: i32,
    pub song_id: i32,
}

pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<user_favorite::Model>>> {
    let favorites = UserFavoriteRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(favorites))
}

pub async fn list_favorites_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<user_favorite::Model>>> {
    let favorites = UserFavoriteRepository::new(state.db.clone())
        .find_by_user_id(user_id)
        .await?;
    Ok(Json(favorites))
}

pub async fn list_favorites_by_song(
    State(state): State<AppState>,
    Path(song_id): Path<i32>,
) -> Result<Json<Vec<user_favorite::Model>>> {
    let favorites = UserFavoriteRepository::new(state.db.clone())
        .find_by_song_id(song_id)
        .await?;
    Ok(Json(favorites))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Json(payload): Json<FavoritePayload>,
) -> Result<Json<user_favorite::Model>> {
    validation::ensure_user_exists(&state.db, payload.user_id).await?;
    validation::ensure_song_exists(&state.db, payload.song_id).await?;

    let repo = UserFavoriteRepository::new(state.db.clone());
    if repo.exists_pair(payload.user_id, payload.song_id).await? {
        return Err(AppError::Validation(
            "Song is already a favorite".to_string(),
        ));
    }

    let favorite = user_favorite::ActiveModel {
        user_id: Set(payload.user_id),
        song_id: Set(payload.song_id),
        favorited_at: Set(Utc::now().into()),
    };

    let created = repo.create(favorite).await?;
    Ok(Json(created))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, song_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    UserFavoriteRepository::new(state.db.clone())
        .delete_pair(user_id, song_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
