pub mod artist;
pub mod album;
pub mod genre;
pub mod song;
pub mod lyric;
pub mod synced_lyric;
pub mod playlist;
pub mod playlist_song;
pub mod user;
pub mod user_favorite;
pub mod play_history;

pub use artist::Entity as Artist;
pub use album::Entity as Album;
pub use genre::Entity as Genre;
pub use song::Entity as Song;
pub use lyric::Entity as Lyric;
pub use synced_lyric::Entity as SyncedLyric;
pub use playlist::Entity as Playlist;
pub use playlist_song::Entity as PlaylistSong;
pub use user::Entity as User;
pub use user_favorite::Entity as UserFavorite;
pub use play_history::Entity as PlayHistory;
