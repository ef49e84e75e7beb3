//! Test utilities for Melodex
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{album, artist, genre, playlist, song, user},
    handlers::auth::hash_password,
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    let config = test_config();

    AppState::new(db, config)
}

pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    artist::ActiveModel {
        name: Set(name.to_string()),
        bio: Set(None),
        country: Set(None),
        birth_date: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test artist")
}

pub async fn create_test_genre(db: &DatabaseConnection, name: &str) -> genre::Model {
    genre::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test genre")
}

pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> user::Model {
    user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(hash_password(password).expect("Failed to hash test password")),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test user")
}

pub async fn create_test_album(
    db: &DatabaseConnection,
    artist_id: i32,
    title: &str,
) -> album::Model {
    album::ActiveModel {
        title: Set(title.to_string()),
        artist_id: Set(artist_id),
        release_date: Set(None),
        cover_image: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test album")
}

pub async fn create_test_song(
    db: &DatabaseConnection,
    title: &str,
    artist_id: Option<i32>,
    album_id: Option<i32>,
    genre_id: Option<i32>,
) -> song::Model {
    song::ActiveModel {
        title: Set(title.to_string()),
        artist_id: Set(artist_id),
        album_id: Set(album_id),
        genre_id: Set(genre_id),
        duration: Set(Some(180)),
        release_date: Set(None),
        audio_file: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test song")
}

pub async fn create_test_playlist(
    db: &DatabaseConnection,
    user_id: i32,
    name: &str,
) -> playlist::Model {
    playlist::ActiveModel {
        name: Set(name.to_string()),
        user_id: Set(user_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test playlist")
}
