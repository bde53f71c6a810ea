//! Track endpoints

use super::{join_ids, MAX_TRACK_IDS};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{FullTrack, Id};
use crate::options::RequestOptions;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct TracksResponse {
    #[serde(default)]
    tracks: Vec<Option<FullTrack>>,
}

impl SpotifyClient {
    /// Get the catalog information of a single track
    ///
    /// Honors the `market` option.
    pub async fn get_track(&self, id: &Id, opts: RequestOptions) -> Result<FullTrack> {
        debug!("Fetching track {}", id);
        let url = self.endpoint(&["tracks", id.as_str()], &opts)?;
        self.get(url).await
    }

    /// Get up to 50 tracks in one request
    ///
    /// The answer keeps the order of `ids`; unknown ids yield `None`.
    pub async fn get_tracks(&self, ids: &[Id], opts: RequestOptions) -> Result<Vec<Option<FullTrack>>> {
        let joined = join_ids(ids, MAX_TRACK_IDS, "track")?;
        debug!("Fetching {} tracks", ids.len());

        let url = self.endpoint(&["tracks"], &opts.with("ids", joined))?;
        let response: TracksResponse = self.get(url).await?;
        Ok(response.tracks)
    }
}
