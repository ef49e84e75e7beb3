//! Pre-write validation of referential and uniqueness constraints.
//!
//! Every check here is a pure read: it inspects the store through the
//! repository layer and reports a reason on failure, never mutating.
//! Concurrent writers racing past these checks are still caught by the
//! store-level unique indexes and foreign keys.

use sea_orm::DatabaseConnection;

use crate::db::repositories::{
    AlbumRepository, ArtistRepository, GenreRepository, PlaylistRepository, SongRepository,
    UserRepository,
};
use crate::error::{AppError, Result};

pub async fn ensure_artist_exists(db: &DatabaseConnection, artist_id: i32) -> Result<()> {
    if !ArtistRepository::new(db.clone()).exists_by_id(artist_id).await? {
        return Err(AppError::Validation(format!(
            "Artist {} does not exist",
            artist_id
        )));
    }
    Ok(())
}

pub async fn ensure_album_exists(db: &DatabaseConnection, album_id: i32) -> Result<()> {
    if !AlbumRepository::new(db.clone()).exists_by_id(album_id).await? {
        return Err(AppError::Validation(format!(
            "Album {} does not exist",
            album_id
        )));
    }
    Ok(())
}

pub async fn ensure_genre_exists(db: &DatabaseConnection, genre_id: i32) -> Result<()> {
    if !GenreRepository::new(db.clone()).exists_by_id(genre_id).await? {
        return Err(AppError::Validation(format!(
            "Genre {} does not exist",
            genre_id
        )));
    }
    Ok(())
}

pub async fn ensure_song_exists(db: &DatabaseConnection, song_id: i32) -> Result<()> {
    if !SongRepository::new(db.clone()).exists_by_id(song_id).await? {
        return Err(AppError::Validation(format!(
            "Song {} does not exist",
            song_id
        )));
    }
    Ok(())
}

pub async fn ensure_user_exists(db: &DatabaseConnection, user_id: i32) -> Result<()> {
    if !UserRepository::new(db.clone()).exists_by_id(user_id).await? {
        return Err(AppError::Validation(format!(
            "User {} does not exist",
            user_id
        )));
    }
    Ok(())
}

pub async fn ensure_playlist_exists(db: &DatabaseConnection, playlist_id: i32) -> Result<()> {
    if !PlaylistRepository::new(db.clone())
        .exists_by_id(playlist_id)
        .await?
    {
        return Err(AppError::Validation(format!(
            "Playlist {} does not exist",
            playlist_id
        )));
    }
    Ok(())
}

/// Checks every foreign key a song payload carries.
pub async fn validate_song_relations(
    db: &DatabaseConnection,
    artist_id: Option<i32>,
    album_id: Option<i32>,
    genre_id: Option<i32>,
) -> Result<()> {
    if let Some(id) = artist_id {
        ensure_artist_exists(db, id).await?;
    }
    if let Some(id) = album_id {
        ensure_album_exists(db, id).await?;
    }
    if let Some(id) = genre_id {
        ensure_genre_exists(db, id).await?;
    }
    Ok(())
}

/// Genre names are unique. `exclude_id` skips the row being updated.
pub async fn validate_genre_name_unique(
    db: &DatabaseConnection,
    name: &str,
    exclude_id: Option<i32>,
) -> Result<()> {
    if let Some(existing) = GenreRepository::new(db.clone()).find_by_name(name).await? {
        if Some(existing.id) != exclude_id {
            return Err(AppError::Validation(format!(
                "Genre \"{}\" already exists",
                name
            )));
        }
    }
    Ok(())
}

/// Usernames and emails are unique. `exclude_id` skips the row being updated.
pub async fn validate_user_unique(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    exclude_id: Option<i32>,
) -> Result<()> {
    let users = UserRepository::new(db.clone());
    if let Some(existing) = users.find_by_username(username).await? {
        if Some(existing.id) != exclude_id {
            return Err(AppError::Validation("Username already exists".to_string()));
        }
    }
    if let Some(existing) = users.find_by_email(email).await? {
        if Some(existing.id) != exclude_id {
            return Err(AppError::Validation("Email already exists".to_string()));
        }
    }
    Ok(())
}

/// A playlist needs a non-blank name and a resolvable owner.
pub async fn validate_playlist(db: &DatabaseConnection, name: &str, user_id: i32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "Playlist name is required".to_string(),
        ));
    }
    ensure_user_exists(db, user_id).await?;
    Ok(())
}
