//! Endpoint methods of [`SpotifyClient`](crate::SpotifyClient)
//!
//! Each submodule adds an `impl SpotifyClient` block for one family of Web
//! API resources. Methods build the endpoint URL, run it through the shared
//! executor and decode the typed answer.

mod album;
mod artist;
mod library;
mod playlist;
mod show;
mod track;
mod user;

use crate::error::{Error, Result};
use crate::models::{Id, Uri};

/// Maximum number of ids accepted by `GET /albums`
pub const MAX_ALBUM_IDS: usize = 20;

/// Maximum number of ids accepted by `GET /tracks`
pub const MAX_TRACK_IDS: usize = 50;

/// Join ids for an `ids=` query parameter, enforcing the endpoint bounds
pub(crate) fn join_ids(ids: &[Id], max: usize, what: &str) -> Result<String> {
    if ids.is_empty() {
        return Err(Error::invalid_input(format!("at least one {what} id is required")));
    }
    if ids.len() > max {
        return Err(Error::invalid_input(format!(
            "at most {max} {what} ids are allowed, got {}",
            ids.len()
        )));
    }

    Ok(ids.iter().map(Id::as_str).collect::<Vec<_>>().join(","))
}

pub(crate) fn require_uris(uris: &[Uri]) -> Result<()> {
    if uris.is_empty() {
        return Err(Error::invalid_input("at least one URI is required"));
    }
    Ok(())
}
