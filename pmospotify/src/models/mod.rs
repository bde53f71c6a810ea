//! Data models for Spotify Web API responses
//!
//! The structures mirror the documented JSON objects. Simplified objects
//! (`SimpleAlbum`, `SimpleTrack`, ...) are embedded in their full
//! counterparts through `#[serde(flatten)]`, and the full objects deref to
//! them so that `full_track.name` reads naturally.
//!
//! Spotify occasionally serializes integers as floats (`"duration_ms":
//! 207959.0`); integer fields go through a lenient deserializer accepting both.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

mod album;
mod artist;
mod page;
mod playlist;
mod show;
mod track;
mod user;

pub use album::{AlbumType, FullAlbum, ReleaseDatePrecision, SavedAlbum, SimpleAlbum};
pub use artist::{FullArtist, SimpleArtist};
pub use page::{
    Cursor, CursorPage, FullArtistCursorPage, FullArtistPage, FullTrackPage, Page,
    PlaylistItemPage, SavedAlbumPage, SavedShowPage, SavedTrackPage, SimpleAlbumPage,
    SimpleEpisodePage, SimplePlaylistPage, SimpleTrackPage,
};
pub use playlist::{FullPlaylist, PlaylistItemsRef, SimplePlaylist};
pub use show::{FullEpisode, FullShow, ResumePoint, SavedShow, SimpleEpisode, SimpleShow};
pub use track::{FullTrack, PlaylistTrack, SavedTrack, SimpleTrack};
pub use user::{ExplicitContent, PrivateUser, User};

/// Layout of the `added_at` timestamps (`YYYY-MM-DDTHH:MM:SSZ`)
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Layout of birthdates and day-precision release dates
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Known public external URLs, keyed by service (usually just `spotify`)
pub type ExternalUrls = HashMap<String, String>;

/// Base-62 identifier of a Spotify object
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Spotify URI such as `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object type segment (`track`, `album`, ...) of a `spotify:<type>:<id>` URI
    pub fn kind(&self) -> Option<&str> {
        self.parts().map(|(kind, _)| kind)
    }

    /// Id segment of a `spotify:<type>:<id>` URI
    pub fn id(&self) -> Option<Id> {
        self.parts().map(|(_, id)| Id::from(id))
    }

    fn parts(&self) -> Option<(&str, &str)> {
        let mut parts = self.0.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("spotify"), Some(kind), Some(id), None) if !kind.is_empty() && !id.is_empty() => {
                Some((kind, id))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uri {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<String> for Uri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Image of an album, artist, show, playlist or user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Source URL of the image
    pub url: String,
    /// Height in pixels, when known
    #[serde(default, deserialize_with = "numeric_opt")]
    pub height: Option<u32>,
    /// Width in pixels, when known
    #[serde(default, deserialize_with = "numeric_opt")]
    pub width: Option<u32>,
}

/// Follower count of an artist, playlist or user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    /// Always null for now (the Web API does not list followers)
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "numeric")]
    pub total: u32,
}

/// Copyright statement of an album or show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
    /// `C` for copyright, `P` for sound recording copyright
    #[serde(rename = "type")]
    pub kind: String,
}

/// Reason a piece of content is not available
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restrictions {
    /// `market`, `product`, `explicit` or a future value
    pub reason: String,
}

/// Deserialize an integer that may be written as a float, or null
pub(crate) fn numeric<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + Default,
{
    numeric_opt(deserializer).map(Option::unwrap_or_default)
}

/// Same as [`numeric`], keeping `null` as `None`
pub(crate) fn numeric_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n,
        Some(other) => return Err(D::Error::custom(format!("expected a number, got {other}"))),
    };

    let raw = number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        })
        .ok_or_else(|| D::Error::custom(format!("invalid numeric value {number}")))?;

    T::try_from(raw)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("numeric value {raw} out of range")))
}

/// Deserialize `null` as the type's default value
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse an `added_at` style timestamp
///
/// Accepts RFC 3339 as well as the bare [`TIMESTAMP_LAYOUT`].
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_LAYOUT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_LAYOUT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[derive(Debug, Deserialize)]
    struct Numbers {
        #[serde(default, deserialize_with = "numeric")]
        int: u32,
        #[serde(default, deserialize_with = "numeric")]
        float: u64,
        #[serde(default, deserialize_with = "numeric")]
        null: u32,
        #[serde(default, deserialize_with = "numeric")]
        missing: u32,
        #[serde(default, deserialize_with = "numeric_opt")]
        opt: Option<u32>,
    }

    #[test]
    fn test_numeric_accepts_floats() {
        let n: Numbers =
            serde_json::from_str(r#"{"int": 3, "float": 207959.0, "null": null, "opt": null}"#)
                .unwrap();
        assert_eq!(n.int, 3);
        assert_eq!(n.float, 207959);
        assert_eq!(n.null, 0);
        assert_eq!(n.missing, 0);
        assert_eq!(n.opt, None);
    }

    #[test]
    fn test_numeric_rejects_strings_and_negatives() {
        assert!(serde_json::from_str::<Numbers>(r#"{"int": "3"}"#).is_err());
        assert!(serde_json::from_str::<Numbers>(r#"{"int": -1.5}"#).is_err());
        assert!(serde_json::from_str::<Numbers>(r#"{"int": 5000000000}"#).is_err());
    }

    #[test]
    fn test_uri_parts() {
        let uri = Uri::from("spotify:track:4iV5W9uYEdYUVa79Axb7Rh");
        assert_eq!(uri.kind(), Some("track"));
        assert_eq!(uri.id(), Some(Id::from("4iV5W9uYEdYUVa79Axb7Rh")));
        assert_eq!(Uri::from("https://open.spotify.com/track/x").kind(), None);
        assert_eq!(Uri::from("spotify:user:a:playlist:b").id(), None);
    }

    #[test]
    fn test_ids_are_transparent() {
        let id: Id = serde_json::from_str(r#""0sNOF9WDwhWunNAHPD3Baj""#).unwrap();
        assert_eq!(id.as_str(), "0sNOF9WDwhWunNAHPD3Baj");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""0sNOF9WDwhWunNAHPD3Baj""#);
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2014-07-08T14:05:27Z").unwrap();
        assert_eq!(ts.year(), 2014);
        assert_eq!(ts.hour(), 14);
        assert!(parse_timestamp("2014-07-08T14:05:27.123+02:00").is_some());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("1985-05-01").unwrap().month(), 5);
        assert!(parse_date("1985").is_none());
    }
}
