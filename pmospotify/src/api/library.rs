//! Saving items of any type to the current user's library
//!
//! These endpoints take Spotify URIs (`spotify:track:...`,
//! `spotify:album:...`, `spotify:playlist:...`), so a single call can mix
//! item types. Each type needs its own modify/read scope.

use super::require_uris;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::Uri;
use crate::options::RequestOptions;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct UrisBody<'a> {
    uris: &'a [Uri],
}

impl SpotifyClient {
    /// Save one or more items to the current user's library
    pub async fn save_to_library(&self, uris: &[Uri]) -> Result<()> {
        require_uris(uris)?;
        debug!("Saving {} items to library", uris.len());

        let url = self.endpoint(&["me", "library"], &RequestOptions::new())?;
        self.put(url, &UrisBody { uris }).await
    }

    /// Remove one or more items from the current user's library
    pub async fn remove_from_library(&self, uris: &[Uri]) -> Result<()> {
        require_uris(uris)?;
        debug!("Removing {} items from library", uris.len());

        let url = self.endpoint(&["me", "library"], &RequestOptions::new())?;
        self.delete(url, &UrisBody { uris }).await
    }

    /// Check whether items are saved in the current user's library
    ///
    /// The answer holds one flag per URI, in request order.
    pub async fn user_has_saved_items(&self, uris: &[Uri]) -> Result<Vec<bool>> {
        require_uris(uris)?;

        let joined = uris.iter().map(Uri::as_str).collect::<Vec<_>>().join(",");
        let url = self.endpoint(
            &["me", "library", "contains"],
            &RequestOptions::new().with("uris", joined),
        )?;
        self.get(url).await
    }
}
