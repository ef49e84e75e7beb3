use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, Json};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{entities::user, repositories::UserRepository},
    error::{AppError, Result},
    state::AppState,
};

#[derive(Deserialize)]
pub struct AuthRequest {
    pub username: String,
    // Only used by register
    pub email: Option<String>,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Hash a password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored Argon2id hash. A malformed hash
/// counts as a failed verification.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<String> {
    let repo = UserRepository::new(state.db.clone());

    if repo.find_by_username(&request.username).await?.is_some() {
        return Ok("Username already exists!".to_string());
    }

    let user = user::ActiveModel {
        username: Set(request.username),
        email: Set(request.email.unwrap_or_default()),
        password_hash: Set(hash_password(&request.password)?),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    repo.create(user).await?;

    Ok("User registered successfully!".to_string())
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<String> {
    let repo = UserRepository::new(state.db.clone());

    if let Some(user) = repo.find_by_username(&request.username).await? {
        if verify_password(&request.password, &user.password_hash) {
            return Ok("Login successful!".to_string());
        }
    }

    Ok("Invalid username or password".to_string())
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<String> {
    let repo = UserRepository::new(state.db.clone());

    if repo.find_by_email(&request.email).await?.is_some() {
        Ok(format!(
            "Password reset instructions sent to {}",
            request.email
        ))
    } else {
        Ok("Email not found!".to_string())
    }
}

pub async fn home() -> String {
    "Auth API is running!".to_string()
}

pub async fn test() -> String {
    "Auth service is working!".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "SuperSecure123!";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let password = "MyPassword";
        let hash = hash_password(password).unwrap();
        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hash1 = hash_password("same_password").unwrap();
        let hash2 = hash_password("same_password").unwrap();
        assert_ne!(hash1, hash2);
        assert!(verify_password("same_password", &hash1));
        assert!(verify_password("same_password", &hash2));
    }

    #[test]
    fn test_verify_with_invalid_hash_format() {
        assert!(!verify_password("password", "not-a-valid-hash"));
    }
}
