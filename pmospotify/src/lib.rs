//! Spotify Web API client library for PMOMusic
//!
//! This crate provides a typed async client for the Spotify Web API. It
//! turns request parameters into HTTP calls and decodes the JSON answers
//! into Rust structures.
//!
//! # Features
//!
//! - **Catalog**: albums, artists, tracks, podcast shows and episodes
//! - **Playlists**: playlist details and items, with `fields` filtering
//! - **Current user**: profile, saved tracks/albums/shows, playlists,
//!   followed artists, top artists and tracks
//! - **Library**: save, remove and check items by Spotify URI
//! - **Pagination**: follow `next`/`previous` links with
//!   [`SpotifyClient::next_page`] and [`SpotifyClient::previous_page`]
//! - **Cancellation**: bind a client to a `CancellationToken`
//! - **Configuration Extension**: API base, timeout and token from pmoconfig
//!
//! The client is handed an OAuth2 bearer token; obtaining and refreshing it
//! is up to the caller.
//!
//! # Example
//!
//! ```no_run
//! use pmospotify::{RequestOptions, SpotifyClient, TimeRange};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotifyClient::new(std::env::var("SPOTIFY_TOKEN")?)?;
//!
//!     let me = client.current_user().await?;
//!     println!("Hello {}", me.display_name.as_deref().unwrap_or(&me.id));
//!
//!     let top = client
//!         .current_users_top_tracks(RequestOptions::new().limit(10).timerange(TimeRange::Short))
//!         .await?;
//!     for track in &top.items {
//!         println!("{} ({} ms)", track.name, track.duration_ms);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Non-2xx answers are decoded from the Web API error envelope into
//! [`Error::Api`]. The client does not retry: rate limiting (429) is
//! reported like any other API error.

mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod options;
pub mod pagination;

#[cfg(feature = "pmoconfig")]
pub mod config_ext;

// Re-exports
pub use api::{MAX_ALBUM_IDS, MAX_TRACK_IDS};
pub use client::{ClientBuilder, SpotifyClient};
pub use error::{Error, Result};
pub use models::*;
pub use options::{AdditionalType, RequestOptions, TimeRange, MARKET_FROM_TOKEN};
pub use pagination::Pageable;

#[cfg(feature = "pmoconfig")]
pub use config_ext::SpotifyConfigExt;

pub use tokio_util::sync::CancellationToken;
