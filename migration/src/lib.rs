pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_artists_table;
mod m20250601_000002_create_genres_table;
mod m20250601_000003_create_users_table;
mod m20250601_000004_create_albums_table;
mod m20250601_000005_create_songs_table;
mod m20250601_000006_create_lyrics_table;
mod m20250601_000007_create_synced_lyrics_table;
mod m20250601_000008_create_playlists_table;
mod m20250601_000009_create_playlist_songs_table;
mod m20250601_000010_create_user_favorites_table;
mod m20250601_000011_create_play_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_artists_table::Migration),
            Box::new(m20250601_000002_create_genres_table::Migration),
            Box::new(m20250601_000003_create_users_table::Migration),
            Box::new(m20250601_000004_create_albums_table::Migration),
            Box::new(m20250601_000005_create_songs_table::Migration),
            Box::new(m20250601_000006_create_lyrics_table::Migration),
            Box::new(m20250601_000007_create_synced_lyrics_table::Migration),
            Box::new(m20250601_000008_create_playlists_table::Migration),
            Box::new(m20250601_000009_create_playlist_songs_table::Migration),
            Box::new(m20250601_000010_create_user_favorites_table::Migration),
            Box::new(m20250601_000011_create_play_history_table::Migration),
        ]
    }
}
