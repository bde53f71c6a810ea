//! Playlist endpoints

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{FullPlaylist, Id, PlaylistItemPage};
use crate::options::RequestOptions;
use tracing::debug;

impl SpotifyClient {
    /// Get a playlist, with its first page of items
    ///
    /// Honors `market` and `fields`. A `fields` filter makes the answer
    /// partial: absent members decode to their defaults.
    pub async fn get_playlist(&self, id: &Id, opts: RequestOptions) -> Result<FullPlaylist> {
        debug!("Fetching playlist {}", id);
        let url = self.endpoint(&["playlists", id.as_str()], &opts)?;
        self.get(url).await
    }

    /// Get the items of a playlist
    ///
    /// Honors `market`, `fields`, `limit`, `offset` and `additional_types`.
    pub async fn get_playlist_items(&self, id: &Id, opts: RequestOptions) -> Result<PlaylistItemPage> {
        debug!("Fetching items of playlist {}", id);
        let url = self.endpoint(&["playlists", id.as_str(), "items"], &opts)?;
        self.get(url).await
    }
}
