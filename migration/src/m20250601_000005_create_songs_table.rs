use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_artists_table::Artists;
use super::m20250601_000002_create_genres_table::Genres;
use super::m20250601_000004_create_albums_table::Albums;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Songs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Songs::Title)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Songs::ArtistId).integer())
                    .col(ColumnDef::new(Songs::AlbumId).integer())
                    .col(ColumnDef::new(Songs::GenreId).integer())
                    .col(ColumnDef::new(Songs::Duration).integer())
                    .col(ColumnDef::new(Songs::ReleaseDate).date())
                    .col(ColumnDef::new(Songs::AudioFile).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_songs_artist_id")
                            .from(Songs::Table, Songs::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_songs_album_id")
                            .from(Songs::Table, Songs::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_songs_genre_id")
                            .from(Songs::Table, Songs::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_songs_artist_id")
                    .table(Songs::Table)
                    .col(Songs::ArtistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_songs_album_id")
                    .table(Songs::Table)
                    .col(Songs::AlbumId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_songs_genre_id")
                    .table(Songs::Table)
                    .col(Songs::GenreId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Songs {
    Table,
    Id,
    Title,
    ArtistId,
    AlbumId,
    GenreId,
    Duration,
    ReleaseDate,
    AudioFile,
}
