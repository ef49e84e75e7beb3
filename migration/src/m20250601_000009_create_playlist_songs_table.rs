use sea_orm_migration::prelude::*;

use super::m20250601_000005_create_songs_table::Songs;
use super::m20250601_000008_create_playlists_table::Playlists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistSongs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlaylistSongs::PlaylistId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlaylistSongs::SongId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlaylistSongs::AddedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PlaylistSongs::PlaylistId)
                            .col(PlaylistSongs::SongId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_songs_playlist_id")
                            .from(PlaylistSongs::Table, PlaylistSongs::PlaylistId)
                            .to(Playlists::Table, Playlists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_songs_song_id")
                            .from(PlaylistSongs::Table, PlaylistSongs::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_playlist_songs_song_id")
                    .table(PlaylistSongs::Table)
                    .col(PlaylistSongs::SongId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaylistSongs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlaylistSongs {
    Table,
    PlaylistId,
    SongId,
    AddedAt,
}
