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
                    .table(Lyrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lyrics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lyrics::SongId).integer().not_null())
                    .col(ColumnDef::new(Lyrics::Content).text().not_null())
                    .col(
                        ColumnDef::new(Lyrics::Language)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lyrics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lyrics_song_id")
                            .from(Lyrics::Table, Lyrics::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lyrics_song_id")
                    .table(Lyrics::Table)
                    .col(Lyrics::SongId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lyrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lyrics {
    Table,
    Id,
    SongId,
    Content,
    Language,
    CreatedAt,
}
