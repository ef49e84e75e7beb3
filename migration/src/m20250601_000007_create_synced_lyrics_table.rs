use sea_orm_migration::prelude::*;

use super::m20250601_000005_create_songs_table::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SyncedLyrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SyncedLyrics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SyncedLyrics::SongId).integer().not_null())
                    .col(
                        ColumnDef::new(SyncedLyrics::TimestampSeconds)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SyncedLyrics::Line).string_len(500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_synced_lyrics_song_id")
                            .from(SyncedLyrics::Table, SyncedLyrics::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_synced_lyrics_song_id")
                    .table(SyncedLyrics::Table)
                    .col(SyncedLyrics::SongId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SyncedLyrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SyncedLyrics {
    Table,
    Id,
    SongId,
    TimestampSeconds,
    Line,
}
