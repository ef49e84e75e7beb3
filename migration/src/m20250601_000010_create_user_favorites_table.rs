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
                    .table(UserFavorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserFavorites::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserFavorites::SongId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserFavorites::FavoritedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserFavorites::UserId)
                            .col(UserFavorites::SongId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_user_id")
                            .from(UserFavorites::Table, UserFavorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_song_id")
                            .from(UserFavorites::Table, UserFavorites::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_favorites_song_id")
                    .table(UserFavorites::Table)
                    .col(UserFavorites::SongId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavorites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavorites {
    Table,
    UserId,
    SongId,
    FavoritedAt,
}
