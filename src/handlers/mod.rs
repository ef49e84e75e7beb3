pub mod health;
pub mod artists;
pub mod albums;
pub mod genres;
pub mod songs;
pub mod lyrics;
pub mod synced_lyrics;
pub mod playlists;
pub mod playlist_songs;
pub mod users;
pub mod user_favorites;
pub mod play_history;
pub mod auth;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth endpoints
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/", get(auth::home))
        .route("/auth/test", get(auth::test))

        // Artist endpoints
        .route("/artists", get(artists::list_artists))
        .route("/artists", post(artists::create_artist))
        .route("/artists/:id", get(artists::get_artist))
        .route("/artists/:id", put(artists::update_artist))
        .route("/artists/:id", delete(artists::delete_artist))

        // Album endpoints
        .route("/albums", get(albums::list_albums))
        .route("/albums", post(albums::create_album))
        .route("/albums/artist/:artistId", get(albums::list_albums_by_artist))
        .route("/albums/:id", get(albums::get_album))
        .route("/albums/:id", put(albums::update_album))
        .route("/albums/:id", delete(albums::delete_album))

        // Genre endpoints
        .route("/genres", get(genres::list_genres))
        .route("/genres", post(genres::create_genre))
        .route("/genres/:id", get(genres::get_genre))
        .route("/genres/:id", put(genres::update_genre))
        .route("/genres/:id", delete(genres::delete_genre))

        // Song endpoints
        .route("/songs", get(songs::list_songs))
        .route("/songs", post(songs::create_song))
        .route("/songs/no-artist", get(songs::list_songs_without_artist))
        .route("/songs/artist/:artistId", get(songs::list_songs_by_artist))
        .route("/songs/album/:albumId", get(songs::list_songs_by_album))
        .route("/songs/genre/:genreId", get(songs::list_songs_by_genre))
        .route("/songs/:id", get(songs::get_song))
        .route("/songs/:id", put(songs::update_song))
        .route("/songs/:id", delete(songs::delete_song))

        // Lyric endpoints
        .route("/lyrics", get(lyrics::list_lyrics))
        .route("/lyrics", post(lyrics::create_lyric))
        .route("/lyrics/song/:songId", get(lyrics::list_lyrics_by_song))
        .route("/lyrics/:id", get(lyrics::get_lyric))
        .route("/lyrics/:id", put(lyrics::update_lyric))
        .route("/lyrics/:id", delete(lyrics::delete_lyric))

        // Synced lyric endpoints
        .route("/synced-lyrics", get(synced_lyrics::list_synced_lyrics))
        .route("/synced-lyrics", post(synced_lyrics::create_synced_lyric))
        .route(
            "/synced-lyrics/song/:songId",
            get(synced_lyrics::list_synced_lyrics_by_song),
        )
        .route("/synced-lyrics/:id", get(synced_lyrics::get_synced_lyric))
        .route("/synced-lyrics/:id", put(synced_lyrics::update_synced_lyric))
        .route("/synced-lyrics/:id", delete(synced_lyrics::delete_synced_lyric))

        // Playlist endpoints
        .route("/playlists", get(playlists::list_playlists))
        .route("/playlists", post(playlists::create_playlist))
        .route("/playlists/user/:userId", get(playlists::list_playlists_by_user))
        .route("/playlists/:id", get(playlists::get_playlist))
        .route("/playlists/:id", put(playlists::update_playlist))
        .route("/playlists/:id", delete(playlists::delete_playlist))

        // Playlist-song endpoints
        .route("/playlist-songs", get(playlist_songs::list_playlist_songs))
        .route("/playlist-songs", post(playlist_songs::add_song_to_playlist))
        .route(
            "/playlist-songs/playlist/:playlistId",
            get(playlist_songs::list_by_playlist),
        )
        .route(
            "/playlist-songs/song/:songId",
            get(playlist_songs::list_by_song),
        )
        .route(
            "/playlist-songs/playlist/:playlistId/song/:songId",
            delete(playlist_songs::remove_song_from_playlist),
        )

        // User endpoints
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/username/:username", get(users::get_user_by_username))
        .route("/users/email/:email", get(users::get_user_by_email))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))

        // User favorite endpoints
        .route("/user-favorites", get(user_favorites::list_favorites))
        .route("/user-favorites", post(user_favorites::add_favorite))
        .route(
            "/user-favorites/user/:userId",
            get(user_favorites::list_favorites_by_user),
        )
        .route(
            "/user-favorites/song/:songId",
            get(user_favorites::list_favorites_by_song),
        )
        .route(
            "/user-favorites/user/:userId/song/:songId",
            delete(user_favorites::remove_favorite),
        )

        // Play history endpoints
        .route("/play-history", get(play_history::list_play_history))
        .route("/play-history", post(play_history::create_play_history_entry))
        .route(
            "/play-history/user/:userId",
            get(play_history::list_play_history_by_user),
        )
        .route("/play-history/:id", get(play_history::get_play_history_entry))
        .route("/play-history/:id", delete(play_history::delete_play_history_entry))
}
