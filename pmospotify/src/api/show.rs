//! Podcast show and episode endpoints

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{FullEpisode, FullShow, Id, SimpleEpisodePage};
use crate::options::RequestOptions;
use tracing::debug;

impl SpotifyClient {
    /// Get the catalog information of a show, with its first episodes
    ///
    /// Honors the `market` option. Without a market, shows that are not
    /// available in the token user's country are reported as not found.
    pub async fn get_show(&self, id: &Id, opts: RequestOptions) -> Result<FullShow> {
        debug!("Fetching show {}", id);
        let url = self.endpoint(&["shows", id.as_str()], &opts)?;
        self.get(url).await
    }

    /// Get the episodes of a show
    ///
    /// Honors `market`, `limit` and `offset`.
    pub async fn get_show_episodes(&self, id: &Id, opts: RequestOptions) -> Result<SimpleEpisodePage> {
        debug!("Fetching episodes of show {}", id);
        let url = self.endpoint(&["shows", id.as_str(), "episodes"], &opts)?;
        self.get(url).await
    }

    /// Get the catalog information of an episode
    pub async fn get_episode(&self, id: &Id, opts: RequestOptions) -> Result<FullEpisode> {
        debug!("Fetching episode {}", id);
        let url = self.endpoint(&["episodes", id.as_str()], &opts)?;
        self.get(url).await
    }
}
