use super::{null_default, numeric, ExternalUrls, Followers, Id, Image, Uri};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Basic data about an artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleArtist {
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub id: Id,
    #[serde(deserialize_with = "null_default")]
    pub uri: Uri,
    /// Web API endpoint providing full details of the artist
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    pub external_urls: ExternalUrls,
}

/// Complete data about an artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullArtist {
    #[serde(flatten)]
    pub artist: SimpleArtist,
    /// 0 to 100, computed from the popularity of the artist's tracks
    #[serde(default, deserialize_with = "numeric")]
    pub popularity: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Deref for FullArtist {
    type Target = SimpleArtist;

    fn deref(&self) -> &SimpleArtist {
        &self.artist
    }
}
