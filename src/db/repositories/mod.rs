use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::db::entities::{
    album, artist, genre, lyric, play_history, playlist, playlist_song, song, synced_lyric, user,
    user_favorite,
};
use crate::error::{AppError, Result};

/// Genre selector for the combined song filter. `Unknown` matches songs
/// with no genre at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreSelector {
    Unknown,
    Id(i32),
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn create(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.insert(&self.db).await?)
    }

    pub async fn update(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        Ok(artist.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = artist::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Artist not found".to_string()));
        }
        Ok(())
    }
}

pub struct AlbumRepository {
    db: DatabaseConnection,
}

impl AlbumRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<album::Model>> {
        Ok(album::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<album::Model>> {
        Ok(album::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn find_by_artist_id(&self, artist_id: i32) -> Result<Vec<album::Model>> {
        Ok(album::Entity::find()
            .filter(album::Column::ArtistId.eq(artist_id))
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, album: album::ActiveModel) -> Result<album::Model> {
        Ok(album.insert(&self.db).await?)
    }

    pub async fn update(&self, album: album::ActiveModel) -> Result<album::Model> {
        Ok(album.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = album::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Album not found".to_string()));
        }
        Ok(())
    }
}

pub struct GenreRepository {
    db: DatabaseConnection,
}

impl GenreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<genre::Model>> {
        Ok(genre::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<genre::Model>> {
        Ok(genre::Entity::find()
            .filter(genre::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn create(&self, genre: genre::ActiveModel) -> Result<genre::Model> {
        Ok(genre.insert(&self.db).await?)
    }

    pub async fn update(&self, genre: genre::ActiveModel) -> Result<genre::Model> {
        Ok(genre.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Genre not found".to_string()));
        }
        Ok(())
    }
}

pub struct SongRepository {
    db: DatabaseConnection,
}

impl SongRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<song::Model>> {
        Ok(song::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<song::Model>> {
        Ok(song::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn find_by_artist_id(&self, artist_id: i32) -> Result<Vec<song::Model>> {
        Ok(song::Entity::find()
            .filter(song::Column::ArtistId.eq(artist_id))
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_album_id(&self, album_id: i32) -> Result<Vec<song::Model>> {
        Ok(song::Entity::find()
            .filter(song::Column::AlbumId.eq(album_id))
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_genre_id(&self, genre_id: i32) -> Result<Vec<song::Model>> {
        Ok(song::Entity::find()
            .filter(song::Column::GenreId.eq(genre_id))
            .all(&self.db)
            .await?)
    }

    /// Combined filter: case-insensitive substring match on the title and
    /// an optional genre selector. Both absent returns every song.
    pub async fn find_by_search_term_and_genre(
        &self,
        search_term: Option<&str>,
        genre: Option<GenreSelector>,
    ) -> Result<Vec<song::Model>> {
        let mut select = song::Entity::find();

        if let Some(term) = search_term {
            if !term.is_empty() {
                let pattern = format!("%{}%", term.to_lowercase());
                select = select.filter(
                    Expr::expr(Func::lower(Expr::col((
                        song::Entity,
                        song::Column::Title,
                    ))))
                    .like(pattern),
                );
            }
        }

        match genre {
            Some(GenreSelector::Unknown) => {
                select = select.filter(song::Column::GenreId.is_null());
            }
            Some(GenreSelector::Id(id)) => {
                select = select.filter(song::Column::GenreId.eq(id));
            }
            None => {}
        }

        Ok(select.all(&self.db).await?)
    }

    /// Songs that carry a genre but have no artist attached.
    pub async fn find_without_artist_with_genre(&self) -> Result<Vec<song::Model>> {
        Ok(song::Entity::find()
            .filter(song::Column::ArtistId.is_null())
            .filter(song::Column::GenreId.is_not_null())
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, song: song::ActiveModel) -> Result<song::Model> {
        Ok(song.insert(&self.db).await?)
    }

    pub async fn update(&self, song: song::ActiveModel) -> Result<song::Model> {
        Ok(song.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = song::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Song not found".to_string()));
        }
        Ok(())
    }
}

pub struct LyricRepository {
    db: DatabaseConnection,
}

impl LyricRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<lyric::Model>> {
        Ok(lyric::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<lyric::Model>> {
        Ok(lyric::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_by_song_id(&self, song_id: i32) -> Result<Vec<lyric::Model>> {
        Ok(lyric::Entity::find()
            .filter(lyric::Column::SongId.eq(song_id))
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, lyric: lyric::ActiveModel) -> Result<lyric::Model> {
        Ok(lyric.insert(&self.db).await?)
    }

    pub async fn update(&self, lyric: lyric::ActiveModel) -> Result<lyric::Model> {
        Ok(lyric.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = lyric::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Lyric not found".to_string()));
        }
        Ok(())
    }
}

pub struct SyncedLyricRepository {
    db: DatabaseConnection,
}

impl SyncedLyricRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<synced_lyric::Model>> {
        Ok(synced_lyric::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<synced_lyric::Model>> {
        Ok(synced_lyric::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Lines for a song in playback order.
    pub async fn find_by_song_id(&self, song_id: i32) -> Result<Vec<synced_lyric::Model>> {
        Ok(synced_lyric::Entity::find()
            .filter(synced_lyric::Column::SongId.eq(song_id))
            .order_by_asc(synced_lyric::Column::TimestampSeconds)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, lyric: synced_lyric::ActiveModel) -> Result<synced_lyric::Model> {
        Ok(lyric.insert(&self.db).await?)
    }

    pub async fn update(&self, lyric: synced_lyric::ActiveModel) -> Result<synced_lyric::Model> {
        Ok(lyric.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = synced_lyric::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Synced lyric not found".to_string()));
        }
        Ok(())
    }
}

pub struct PlaylistRepository {
    db: DatabaseConnection,
}

impl PlaylistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<playlist::Model>> {
        Ok(playlist::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<playlist::Model>> {
        Ok(playlist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<playlist::Model>> {
        Ok(playlist::Entity::find()
            .filter(playlist::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, playlist: playlist::ActiveModel) -> Result<playlist::Model> {
        Ok(playlist.insert(&self.db).await?)
    }

    pub async fn update(&self, playlist: playlist::ActiveModel) -> Result<playlist::Model> {
        Ok(playlist.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = playlist::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Playlist not found".to_string()));
        }
        Ok(())
    }
}

pub struct PlaylistSongRepository {
    db: DatabaseConnection,
}

impl PlaylistSongRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<playlist_song::Model>> {
        Ok(playlist_song::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_playlist_id(
        &self,
        playlist_id: i32,
    ) -> Result<Vec<playlist_song::Model>> {
        Ok(playlist_song::Entity::find()
            .filter(playlist_song::Column::PlaylistId.eq(playlist_id))
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_song_id(&self, song_id: i32) -> Result<Vec<playlist_song::Model>> {
        Ok(playlist_song::Entity::find()
            .filter(playlist_song::Column::SongId.eq(song_id))
            .all(&self.db)
            .await?)
    }

    pub async fn exists_pair(&self, playlist_id: i32, song_id: i32) -> Result<bool> {
        Ok(playlist_song::Entity::find_by_id((playlist_id, song_id))
            .one(&self.db)
            .await?
            .is_some())
    }

    pub async fn create(
        &self,
        entry: playlist_song::ActiveModel,
    ) -> Result<playlist_song::Model> {
        Ok(entry.insert(&self.db).await?)
    }

    pub async fn delete_pair(&self, playlist_id: i32, song_id: i32) -> Result<()> {
        let res = playlist_song::Entity::delete_by_id((playlist_id, song_id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(
                "Song is not in this playlist".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<user::Model>> {
        Ok(user::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    pub async fn create(&self, user: user::ActiveModel) -> Result<user::Model> {
        Ok(user.insert(&self.db).await?)
    }

    pub async fn update(&self, user: user::ActiveModel) -> Result<user::Model> {
        Ok(user.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = user::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}

pub struct UserFavoriteRepository {
    db: DatabaseConnection,
}

impl UserFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<user_favorite::Model>> {
        Ok(user_favorite::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<user_favorite::Model>> {
        Ok(user_favorite::Entity::find()
            .filter(user_favorite::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_song_id(&self, song_id: i32) -> Result<Vec<user_favorite::Model>> {
        Ok(user_favorite::Entity::find()
            .filter(user_favorite::Column::SongId.eq(song_id))
            .all(&self.db)
            .await?)
    }

    pub async fn exists_pair(&self, user_id: i32, song_id: i32) -> Result<bool> {
        Ok(user_favorite::Entity::find_by_id((user_id, song_id))
            .one(&self.db)
            .await?
            .is_some())
    }

    pub async fn create(
        &self,
        favorite: user_favorite::ActiveModel,
    ) -> Result<user_favorite::Model> {
        Ok(favorite.insert(&self.db).await?)
    }

    pub async fn delete_pair(&self, user_id: i32, song_id: i32) -> Result<()> {
        let res = user_favorite::Entity::delete_by_id((user_id, song_id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }
        Ok(())
    }
}

pub struct PlayHistoryRepository {
    db: DatabaseConnection,
}

impl PlayHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<play_history::Model>> {
        Ok(play_history::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<play_history::Model>> {
        Ok(play_history::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<play_history::Model>> {
        Ok(play_history::Entity::find()
            .filter(play_history::Column::UserId.eq(user_id))
            .order_by_desc(play_history::Column::PlayedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, entry: play_history::ActiveModel) -> Result<play_history::Model> {
        Ok(entry.insert(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let res = play_history::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Play history entry not found".to_string()));
        }
        Ok(())
    }
}
