//! Album endpoints

use super::{join_ids, MAX_ALBUM_IDS};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{FullAlbum, Id, SimpleTrackPage};
use crate::options::RequestOptions;
use serde::Deserialize;
use tracing::debug;

/// Answer of `GET /albums`
#[derive(Debug, Deserialize)]
struct AlbumsResponse {
    #[serde(default)]
    albums: Vec<Option<FullAlbum>>,
}

impl SpotifyClient {
    /// Get the catalog information of a single album
    ///
    /// Honors the `market` option.
    pub async fn get_album(&self, id: &Id, opts: RequestOptions) -> Result<FullAlbum> {
        debug!("Fetching album {}", id);
        let url = self.endpoint(&["albums", id.as_str()], &opts)?;
        self.get(url).await
    }

    /// Get up to 20 albums in one request
    ///
    /// The answer keeps the order of `ids`; unknown ids yield `None`.
    pub async fn get_albums(&self, ids: &[Id], opts: RequestOptions) -> Result<Vec<Option<FullAlbum>>> {
        let joined = join_ids(ids, MAX_ALBUM_IDS, "album")?;
        debug!("Fetching {} albums", ids.len());

        let url = self.endpoint(&["albums"], &opts.with("ids", joined))?;
        let response: AlbumsResponse = self.get(url).await?;
        Ok(response.albums)
    }

    /// Get the tracks of an album
    ///
    /// Honors `market`, `limit` and `offset`.
    pub async fn get_album_tracks(&self, id: &Id, opts: RequestOptions) -> Result<SimpleTrackPage> {
        debug!("Fetching tracks of album {}", id);
        let url = self.endpoint(&["albums", id.as_str(), "tracks"], &opts)?;
        self.get(url).await
    }
}
