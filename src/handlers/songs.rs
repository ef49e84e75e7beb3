use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::{
        entities::song,
        repositories::{GenreSelector, SongRepository},
    },
    error::{AppError, Result},
    state::AppState,
    validation,
};

#[derive(Deserialize)]
pub struct ListSongsQuery {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub genre: Option<String>,
    pub artist: Option<i32>,
}

#[derive(Deserialize)]
pub struct SongPayload {
    pub title: String,
    pub artist_id: Option<i32>,
    pub album_id: Option<i32>,
    pub genre_id: Option<i32>,
    pub duration: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub audio_file: Option<String>,
}

/// The genre query param is either a concrete id or the sentinel
/// "unknown"/"-1" selecting songs with no genre. An empty value means no
/// genre filtering at all.
fn parse_genre_selector(raw: &str) -> Result<Option<GenreSelector>> {
    if raw.is_empty() {
        return Ok(None);
    }
    if raw.eq_ignore_ascii_case("unknown") || raw == "-1" {
        return Ok(Some(GenreSelector::Unknown));
    }
    raw.parse::<i32>()
        .map(|id| Some(GenreSelector::Id(id)))
        .map_err(|_| AppError::Validation(format!("Invalid genre selector \"{}\"", raw)))
}

pub async fn list_songs(
    State(state): State<AppState>,
    Query(query): Query<ListSongsQuery>,
) -> Result<Json<Vec<song::Model>>> {
    let genre = match query.genre.as_deref() {
        Some(raw) => parse_genre_selector(raw)?,
        None => None,
    };

    let mut songs = SongRepository::new(state.db.clone())
        .find_by_search_term_and_genre(query.search_term.as_deref(), genre)
        .await?;

    if let Some(artist_id) = query.artist {
        songs.retain(|s| s.artist_id == Some(artist_id));
    }

    Ok(Json(songs))
}

/// Songs that have a genre but no artist attached.
pub async fn list_songs_without_artist(
    State(state): State<AppState>,
) -> Result<Json<Vec<song::Model>>> {
    let songs = SongRepository::new(state.db.clone())
        .find_without_artist_with_genre()
        .await?;
    Ok(Json(songs))
}

pub async fn list_songs_by_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Json<Vec<song::Model>>> {
    let songs = SongRepository::new(state.db.clone())
        .find_by_artist_id(artist_id)
        .await?;
    Ok(Json(songs))
}

pub async fn list_songs_by_album(
    State(state): State<AppState>,
    Path(album_id): Path<i32>,
) -> Result<Json<Vec<song::Model>>> {
    let songs = SongRepository::new(state.db.clone())
        .find_by_album_id(album_id)
        .await?;
    Ok(Json(songs))
}

pub async fn list_songs_by_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<i32>,
) -> Result<Json<Vec<song::Model>>> {
    let songs = SongRepository::new(state.db.clone())
        .find_by_genre_id(genre_id)
        .await?;
    Ok(Json(songs))
}

pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<song::Model>> {
    let song = SongRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Song not found".to_string()))?;
    Ok(Json(song))
}

pub async fn create_song(
    State(state): State<AppState>,
    Json(payload): Json<SongPayload>,
) -> Result<Json<song::Model>> {
    validation::validate_song_relations(
        &state.db,
        payload.artist_id,
        payload.album_id,
        payload.genre_id,
    )
    .await?;

    let song = song::ActiveModel {
        title: Set(payload.title),
        artist_id: Set(payload.artist_id),
        album_id: Set(payload.album_id),
        genre_id: Set(payload.genre_id),
        duration: Set(payload.duration),
        release_date: Set(payload.release_date),
        audio_file: Set(payload.audio_file),
        ..Default::default()
    };

    let created = SongRepository::new(state.db.clone()).create(song).await?;
    Ok(Json(created))
}

pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SongPayload>,
) -> Result<Json<song::Model>> {
    let repo = SongRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Song not found".to_string()))?;

    validation::validate_song_relations(
        &state.db,
        payload.artist_id,
        payload.album_id,
        payload.genre_id,
    )
    .await?;

    let mut song: song::ActiveModel = existing.into();
    song.title = Set(payload.title);
    song.artist_id = Set(payload.artist_id);
    song.album_id = Set(payload.album_id);
    song.genre_id = Set(payload.genre_id);
    song.duration = Set(payload.duration);
    song.release_date = Set(payload.release_date);
    song.audio_file = Set(payload.audio_file);

    let updated = repo.update(song).await?;
    Ok(Json(updated))
}

pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    SongRepository::new(state.db.clone()).delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
