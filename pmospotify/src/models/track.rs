use super::{
    null_default, numeric, parse_timestamp, ExternalUrls, Id, Restrictions, SimpleAlbum,
    SimpleArtist, Uri, User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::time::Duration;

/// Basic data about a track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleTrack {
    /// Album of the track (absent when listed through an album)
    pub album: SimpleAlbum,
    pub artists: Vec<SimpleArtist>,
    pub available_markets: Vec<String>,
    /// Usually 1 unless the album has several discs
    #[serde(deserialize_with = "numeric")]
    pub disc_number: u32,
    #[serde(deserialize_with = "numeric")]
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    /// Web API endpoint providing full details of the track
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    /// Null for local files
    #[serde(deserialize_with = "null_default")]
    pub id: Id,
    pub is_local: bool,
    pub name: String,
    /// 30 second MP3 preview
    pub preview_url: Option<String>,
    /// Position on the disc given by `disc_number`
    #[serde(deserialize_with = "numeric")]
    pub track_number: u32,
    #[serde(deserialize_with = "null_default")]
    pub uri: Uri,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    pub restrictions: Option<Restrictions>,
}

impl SimpleTrack {
    /// Track length as a [`Duration`]
    pub fn time_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl fmt::Display for SimpleTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRACK<[{}] [{}]>", self.id, self.name)
    }
}

/// Complete data about a track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullTrack {
    #[serde(flatten)]
    pub track: SimpleTrack,
    /// 0 to 100, 100 being the most popular
    #[serde(default, deserialize_with = "numeric")]
    pub popularity: u32,
    /// Known external ids (`isrc`, `ean`, `upc`)
    #[serde(default)]
    pub external_ids: HashMap<String, String>,
    /// Only reported when a market was given (track relinking)
    #[serde(default)]
    pub is_playable: Option<bool>,
}

impl Deref for FullTrack {
    type Target = SimpleTrack;

    fn deref(&self) -> &SimpleTrack {
        &self.track
    }
}

/// Entry of a playlist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistTrack {
    /// When the item was added; very old playlists leave it empty
    #[serde(deserialize_with = "null_default")]
    pub added_at: String,
    /// Who added the item; very old playlists leave it empty
    pub added_by: Option<User>,
    pub is_local: bool,
    #[serde(alias = "track", deserialize_with = "null_default")]
    pub item: FullTrack,
}

impl PlaylistTrack {
    pub fn added_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.added_at)
    }
}

/// Track saved in the current user's library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedTrack {
    /// When the track was saved, as `YYYY-MM-DDTHH:MM:SSZ`
    #[serde(default, deserialize_with = "null_default")]
    pub added_at: String,
    #[serde(default)]
    pub track: FullTrack,
}

impl SavedTrack {
    pub fn added_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.added_at)
    }
}

impl Deref for SavedTrack {
    type Target = FullTrack;

    fn deref(&self) -> &FullTrack {
        &self.track
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_and_display() {
        let track: FullTrack = serde_json::from_str(
            r#"{"id": "1zHlj4dQ8ZAtrayhuDDmkY", "name": "Timber", "duration_ms": 204160.0, "is_playable": true}"#,
        )
        .unwrap();
        assert_eq!(track.time_duration(), Duration::from_millis(204160));
        assert_eq!(track.is_playable, Some(true));
        assert_eq!(track.to_string(), "TRACK<[1zHlj4dQ8ZAtrayhuDDmkY] [Timber]>");
    }

    #[test]
    fn test_local_track_has_null_id() {
        let track: SimpleTrack =
            serde_json::from_str(r#"{"id": null, "name": "demo.mp3", "is_local": true, "uri": "spotify:local:::demo.mp3:0"}"#)
                .unwrap();
        assert!(track.id.as_str().is_empty());
        assert!(track.is_local);
    }

    #[test]
    fn test_playlist_track_accepts_legacy_key() {
        let entry: PlaylistTrack = serde_json::from_str(
            r#"{"added_at": "2014-09-01T04:21:28Z", "added_by": null, "is_local": false, "track": {"name": "Legacy"}}"#,
        )
        .unwrap();
        assert_eq!(entry.item.name, "Legacy");
        assert!(entry.added_by.is_none());
        assert!(entry.added_at_time().is_some());
    }
}
