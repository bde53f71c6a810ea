use super::album::release_date;
use super::{
    null_default, numeric, parse_timestamp, Copyright, ExternalUrls, Id, Image,
    ReleaseDatePrecision, Restrictions, SimpleEpisodePage, Uri,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::time::Duration;

/// Basic data about a podcast show
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleShow {
    pub available_markets: Vec<String>,
    pub copyrights: Vec<Copyright>,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub html_description: String,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    #[serde(deserialize_with = "null_default")]
    pub id: Id,
    pub images: Vec<Image>,
    /// True when the episodes are hosted outside of Spotify's CDN
    pub is_externally_hosted: Option<bool>,
    /// ISO 639 codes of the languages used in the show
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub media_type: String,
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub publisher: String,
    #[serde(deserialize_with = "numeric")]
    pub total_episodes: u32,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub uri: Uri,
}

/// Complete data about a show, with its first page of episodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullShow {
    #[serde(flatten)]
    pub show: SimpleShow,
    #[serde(default)]
    pub episodes: SimpleEpisodePage,
}

impl Deref for FullShow {
    type Target = SimpleShow;

    fn deref(&self) -> &SimpleShow {
        &self.show
    }
}

/// Show saved in the current user's library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedShow {
    #[serde(default, deserialize_with = "null_default")]
    pub added_at: String,
    #[serde(default)]
    pub show: SimpleShow,
}

impl SavedShow {
    pub fn added_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.added_at)
    }
}

impl Deref for SavedShow {
    type Target = SimpleShow;

    fn deref(&self) -> &SimpleShow {
        &self.show
    }
}

/// Playback position of the current user in an episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumePoint {
    pub fully_played: bool,
    #[serde(deserialize_with = "numeric")]
    pub resume_position_ms: u64,
}

/// Basic data about a podcast episode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEpisode {
    pub audio_preview_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub html_description: String,
    #[serde(deserialize_with = "numeric")]
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    #[serde(deserialize_with = "null_default")]
    pub id: Id,
    pub images: Vec<Image>,
    pub is_externally_hosted: bool,
    pub is_playable: bool,
    pub languages: Vec<String>,
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_default")]
    pub release_date_precision: ReleaseDatePrecision,
    /// Only present with the `user-read-playback-position` scope
    pub resume_point: Option<ResumePoint>,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub uri: Uri,
    pub restrictions: Option<Restrictions>,
}

impl SimpleEpisode {
    pub fn release_date_time(&self) -> Option<NaiveDate> {
        release_date(&self.release_date, self.release_date_precision)
    }

    pub fn time_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Complete data about an episode, including its show
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullEpisode {
    #[serde(flatten)]
    pub episode: SimpleEpisode,
    #[serde(default)]
    pub show: SimpleShow,
}

impl Deref for FullEpisode {
    type Target = SimpleEpisode;

    fn deref(&self) -> &SimpleEpisode {
        &self.episode
    }
}
