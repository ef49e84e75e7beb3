use sea_orm_migration::prelude::*;

use super::m20250601_000003_create_users_table::Users;
use super::m20250601_000005_create_songs_table::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlayHistory::UserId).integer().not_null())
                    .col(ColumnDef::new(PlayHistory::SongId).integer().not_null())
                    .col(
                        ColumnDef::new(PlayHistory::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_play_history_user_id")
                            .from(PlayHistory::Table, PlayHistory::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_play_history_song_id")
                            .from(PlayHistory::Table, PlayHistory::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_play_history_user_id")
                    .table(PlayHistory::Table)
                    .col(PlayHistory::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_play_history_song_id")
                    .table(PlayHistory::Table)
                    .col(PlayHistory::SongId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayHistory {
    Table,
    Id,
    UserId,
    SongId,
    PlayedAt,
}
