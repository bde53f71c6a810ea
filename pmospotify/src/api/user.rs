//! Current user profile and "Your Music" listings

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{
    FullArtistCursorPage, FullArtistPage, FullTrackPage, PrivateUser, SavedAlbumPage,
    SavedShowPage, SavedTrackPage, SimplePlaylistPage, User,
};
use crate::options::RequestOptions;
use serde::Deserialize;
use tracing::debug;

/// Answer of `GET /me/following`
#[derive(Debug, Deserialize)]
struct FollowedArtistsResponse {
    #[serde(default)]
    artists: FullArtistCursorPage,
}

impl SpotifyClient {
    /// Get the profile of the user owning the access token
    ///
    /// The email needs the `user-read-email` scope; country, product and
    /// explicit content settings need `user-read-private`.
    pub async fn current_user(&self) -> Result<PrivateUser> {
        debug!("Fetching current user profile");
        let url = self.endpoint(&["me"], &RequestOptions::new())?;
        self.get(url).await
    }

    /// Get the public profile of any user
    pub async fn get_users_public_profile(&self, user_id: &str) -> Result<User> {
        debug!("Fetching public profile of {}", user_id);
        let url = self.endpoint(&["users", user_id], &RequestOptions::new())?;
        self.get(url).await
    }

    /// Get the shows saved in the current user's library
    ///
    /// Honors `limit` and `offset`.
    pub async fn current_users_shows(&self, opts: RequestOptions) -> Result<SavedShowPage> {
        let url = self.endpoint(&["me", "shows"], &opts)?;
        self.get(url).await
    }

    /// Get the tracks saved in the current user's library
    ///
    /// Honors `market`, `limit` and `offset`.
    pub async fn current_users_tracks(&self, opts: RequestOptions) -> Result<SavedTrackPage> {
        let url = self.endpoint(&["me", "tracks"], &opts)?;
        self.get(url).await
    }

    /// Get the artists followed by the current user
    ///
    /// Needs the `user-follow-read` scope. Honors `limit` and `after`; the
    /// next cursor is in [`CursorPage::cursors`](crate::CursorPage::cursors).
    pub async fn current_users_followed_artists(
        &self,
        opts: RequestOptions,
    ) -> Result<FullArtistCursorPage> {
        let url = self.endpoint(&["me", "following"], &opts.with("type", "artist"))?;
        let response: FollowedArtistsResponse = self.get(url).await?;
        Ok(response.artists)
    }

    /// Get the albums saved in the current user's library
    ///
    /// Honors `market`, `limit` and `offset`.
    pub async fn current_users_albums(&self, opts: RequestOptions) -> Result<SavedAlbumPage> {
        let url = self.endpoint(&["me", "albums"], &opts)?;
        self.get(url).await
    }

    /// Get the playlists owned or followed by the current user
    ///
    /// Private playlists need `playlist-read-private` and collaborative ones
    /// `playlist-read-collaborative`. Honors `limit` and `offset`.
    pub async fn current_users_playlists(&self, opts: RequestOptions) -> Result<SimplePlaylistPage> {
        let url = self.endpoint(&["me", "playlists"], &opts)?;
        self.get(url).await
    }

    /// Get the current user's top artists
    ///
    /// Needs `user-top-read`. Honors `limit`, `offset` and `timerange`
    /// (medium term when unset).
    pub async fn current_users_top_artists(&self, opts: RequestOptions) -> Result<FullArtistPage> {
        let url = self.endpoint(&["me", "top", "artists"], &opts)?;
        self.get(url).await
    }

    /// Get the current user's top tracks
    ///
    /// Needs `user-top-read`. Honors `limit`, `offset` and `timerange`
    /// (medium term when unset).
    pub async fn current_users_top_tracks(&self, opts: RequestOptions) -> Result<FullTrackPage> {
        let url = self.endpoint(&["me", "top", "tracks"], &opts)?;
        self.get(url).await
    }
}
