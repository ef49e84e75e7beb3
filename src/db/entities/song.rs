use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub artist_id: Option<i32>,
    pub album_id: Option<i32>,
    pub genre_id: Option<i32>,
    pub duration: Option<i32>,
    pub release_date: Option<Date>,
    pub audio_file: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Artist,
    #[sea_orm(
        belongs_to = "super::album::Entity",
        from = "Column::AlbumId",
        to = "super::album::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Album,
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Genre,
    #[sea_orm(has_many = "super::lyric::Entity")]
    Lyrics,
    #[sea_orm(has_many = "super::synced_lyric::Entity")]
    SyncedLyrics,
    #[sea_orm(has_many = "super::playlist_song::Entity")]
    PlaylistSongs,
    #[sea_orm(has_many = "super::user_favorite::Entity")]
    UserFavorites,
    #[sea_orm(has_many = "super::play_history::Entity")]
    PlayHistory,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl Related<super::lyric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lyrics.def()
    }
}

impl Related<super::synced_lyric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SyncedLyrics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
