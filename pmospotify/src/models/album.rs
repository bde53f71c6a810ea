use super::{
    null_default, numeric, parse_date, parse_timestamp, Copyright, ExternalUrls, Id, Image,
    Restrictions, SimpleArtist, SimpleTrackPage, Uri,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Deref;

/// Kind of release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    #[default]
    Album,
    Single,
    Compilation,
    AppearsOn,
    #[serde(other)]
    Unknown,
}

/// How much of `release_date` is meaningful
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    #[default]
    Day,
    #[serde(other)]
    Unknown,
}

/// Basic data about an album
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleAlbum {
    pub name: String,
    pub artists: Vec<SimpleArtist>,
    /// Relationship to the artist when listed through an artist's albums
    pub album_group: Option<AlbumType>,
    #[serde(deserialize_with = "null_default")]
    pub album_type: AlbumType,
    #[serde(deserialize_with = "null_default")]
    pub id: Id,
    #[serde(deserialize_with = "null_default")]
    pub uri: Uri,
    /// Markets where the album is available, as ISO 3166-1 alpha-2 codes
    pub available_markets: Vec<String>,
    /// Web API endpoint providing full details of the album
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    /// Cover art, widest first
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    /// Release date, `1981`, `1981-12` or `1981-12-15` depending on precision
    #[serde(deserialize_with = "null_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_default")]
    pub release_date_precision: ReleaseDatePrecision,
    #[serde(deserialize_with = "numeric")]
    pub total_tracks: u32,
    pub restrictions: Option<Restrictions>,
}

impl SimpleAlbum {
    /// Release date as a calendar date
    ///
    /// Missing month or day components (year and month precision) are
    /// replaced by `1`.
    pub fn release_date_time(&self) -> Option<NaiveDate> {
        release_date(&self.release_date, self.release_date_precision)
    }
}

pub(crate) fn release_date(value: &str, precision: ReleaseDatePrecision) -> Option<NaiveDate> {
    match precision {
        ReleaseDatePrecision::Year => parse_date(&format!("{value}-01-01")),
        ReleaseDatePrecision::Month => parse_date(&format!("{value}-01")),
        ReleaseDatePrecision::Day => parse_date(value),
        // Precision unknown: infer it from the shape of the value
        ReleaseDatePrecision::Unknown => match value.matches('-').count() {
            0 => release_date(value, ReleaseDatePrecision::Year),
            1 => release_date(value, ReleaseDatePrecision::Month),
            _ => parse_date(value),
        },
    }
}

/// Complete data about an album
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullAlbum {
    #[serde(flatten)]
    pub album: SimpleAlbum,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    /// Known external ids (`upc`, `ean`, `isrc`)
    #[serde(default)]
    pub external_ids: HashMap<String, String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// 0 to 100, 100 being the most popular
    #[serde(default, deserialize_with = "numeric")]
    pub popularity: u32,
    /// First page of the album's tracks
    #[serde(default)]
    pub tracks: SimpleTrackPage,
}

impl Deref for FullAlbum {
    type Target = SimpleAlbum;

    fn deref(&self) -> &SimpleAlbum {
        &self.album
    }
}

/// Album saved in the current user's library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedAlbum {
    /// When the album was saved, as `YYYY-MM-DDTHH:MM:SSZ`
    #[serde(default, deserialize_with = "null_default")]
    pub added_at: String,
    #[serde(default)]
    pub album: FullAlbum,
}

impl SavedAlbum {
    pub fn added_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.added_at)
    }
}

impl Deref for SavedAlbum {
    type Target = FullAlbum;

    fn deref(&self) -> &FullAlbum {
        &self.album
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn album(date: &str, precision: ReleaseDatePrecision) -> SimpleAlbum {
        SimpleAlbum {
            release_date: date.to_string(),
            release_date_precision: precision,
            ..Default::default()
        }
    }

    #[test]
    fn test_release_date_precisions() {
        let year = album("1983", ReleaseDatePrecision::Year).release_date_time().unwrap();
        assert_eq!((year.year(), year.month(), year.day()), (1983, 1, 1));

        let month = album("1983-10", ReleaseDatePrecision::Month).release_date_time().unwrap();
        assert_eq!((month.year(), month.month(), month.day()), (1983, 10, 1));

        let day = album("1983-10-14", ReleaseDatePrecision::Day).release_date_time().unwrap();
        assert_eq!(day.day(), 14);
    }

    #[test]
    fn test_release_date_unknown_precision() {
        let date = album("2001-03", ReleaseDatePrecision::Unknown).release_date_time().unwrap();
        assert_eq!(date.month(), 3);
        assert!(album("", ReleaseDatePrecision::Day).release_date_time().is_none());
    }

    #[test]
    fn test_album_type_fallback() {
        let simple: SimpleAlbum =
            serde_json::from_str(r#"{"name": "x", "album_type": "mixtape", "album_group": "appears_on"}"#)
                .unwrap();
        assert_eq!(simple.album_type, AlbumType::Unknown);
        assert_eq!(simple.album_group, Some(AlbumType::AppearsOn));
    }

    #[test]
    fn test_full_album_derefs_to_simple() {
        let full: FullAlbum = serde_json::from_str(
            r#"{"name": "She's So Unusual", "total_tracks": 13.0, "label": "Epic", "popularity": 61}"#,
        )
        .unwrap();
        assert_eq!(full.name, "She's So Unusual");
        assert_eq!(full.total_tracks, 13);
        assert_eq!(full.label.as_deref(), Some("Epic"));
    }
}
