use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{
    db::{entities::user, repositories::UserRepository},
    error::{AppError, Result},
    state::AppState,
    validation,
};

use super::auth::hash_password;

#[derive(Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User representation returned to clients. The stored hash never leaves
/// the server.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = UserRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>> {
    let user = UserRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user.into()))
}

pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>> {
    let user = UserRepository::new(state.db.clone())
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user.into()))
}

pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>> {
    let user = UserRepository::new(state.db.clone())
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user.into()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>> {
    validation::validate_user_unique(&state.db, &payload.username, &payload.email, None).await?;

    let user = user::ActiveModel {
        username: Set(payload.username),
        email: Set(payload.email),
        password_hash: Set(hash_password(&payload.password)?),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let created = UserRepository::new(state.db.clone()).create(user).await?;
    Ok(Json(created.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    validation::validate_user_unique(&state.db, &payload.username, &payload.email, Some(id))
        .await?;

    let mut user: user::ActiveModel = existing.into();
    user.username = Set(payload.username);
    user.email = Set(payload.email);
    user.password_hash = Set(hash_password(&payload.password)?);

    let updated = repo.update(user).await?;
    Ok(Json(updated.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    UserRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
