//! Artist endpoints

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{FullArtist, FullTrack, Id, SimpleAlbumPage};
use crate::options::RequestOptions;
use serde::Deserialize;
use tracing::debug;

/// Answer of `GET /artists/{id}/top-tracks`
#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    #[serde(default)]
    tracks: Vec<FullTrack>,
}

impl SpotifyClient {
    /// Get the catalog information of an artist
    pub async fn get_artist(&self, id: &Id) -> Result<FullArtist> {
        debug!("Fetching artist {}", id);
        let url = self.endpoint(&["artists", id.as_str()], &RequestOptions::new())?;
        self.get(url).await
    }

    /// Get the albums of an artist
    ///
    /// Honors `market`, `limit` and `offset`.
    pub async fn get_artist_albums(&self, id: &Id, opts: RequestOptions) -> Result<SimpleAlbumPage> {
        debug!("Fetching albums of artist {}", id);
        let url = self.endpoint(&["artists", id.as_str(), "albums"], &opts)?;
        self.get(url).await
    }

    /// Get the top tracks of an artist in a country
    ///
    /// `country` is an ISO 3166-1 alpha-2 code or
    /// [`MARKET_FROM_TOKEN`](crate::MARKET_FROM_TOKEN).
    pub async fn get_artist_top_tracks(&self, id: &Id, country: &str) -> Result<Vec<FullTrack>> {
        debug!("Fetching top tracks of artist {} in {}", id, country);
        let url = self.endpoint(
            &["artists", id.as_str(), "top-tracks"],
            &RequestOptions::new().country(country),
        )?;
        let response: TopTracksResponse = self.get(url).await?;
        Ok(response.tracks)
    }
}
