use super::{null_default, numeric, ExternalUrls, Followers, Id, Image, PlaylistItemPage, Uri, User};
use serde::{ser::Error as _, Deserialize, Serialize, Serializer};
use std::ops::Deref;

/// Link to the items of a playlist, with their count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistItemsRef {
    /// Web API endpoint listing the items
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    #[serde(deserialize_with = "numeric")]
    pub total: u32,
}

/// Basic data about a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplePlaylist {
    pub collaborative: bool,
    /// Only returned for modified, verified playlists
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    pub external_urls: ExternalUrls,
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    #[serde(deserialize_with = "null_default")]
    pub id: Id,
    pub images: Vec<Image>,
    pub name: String,
    pub owner: User,
    /// Null when the playlist status is not relevant
    #[serde(rename = "public", deserialize_with = "null_default")]
    pub is_public: bool,
    /// Version identifier of the playlist
    #[serde(deserialize_with = "null_default")]
    pub snapshot_id: String,
    #[serde(alias = "tracks")]
    pub items: PlaylistItemsRef,
    #[serde(deserialize_with = "null_default")]
    pub uri: Uri,
}

/// Complete data about a playlist, with its first page of items
///
/// The Web API sends a single `items` object holding the page. Its `href`
/// and `total` are mirrored into `playlist.items`, so both views agree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "FullPlaylistRepr")]
pub struct FullPlaylist {
    pub playlist: SimplePlaylist,
    pub followers: Followers,
    pub items: PlaylistItemPage,
}

#[derive(Deserialize)]
struct FullPlaylistRepr {
    #[serde(flatten)]
    playlist: SimplePlaylist,
    #[serde(default)]
    followers: Followers,
    #[serde(default, alias = "tracks")]
    items: PlaylistItemPage,
}

impl From<FullPlaylistRepr> for FullPlaylist {
    fn from(repr: FullPlaylistRepr) -> Self {
        let mut playlist = repr.playlist;
        playlist.items = PlaylistItemsRef {
            href: repr.items.href.clone(),
            total: repr.items.total,
        };
        Self {
            playlist,
            followers: repr.followers,
            items: repr.items,
        }
    }
}

impl Serialize for FullPlaylist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut value = serde_json::to_value(&self.playlist).map_err(S::Error::custom)?;
        if let serde_json::Value::Object(map) = &mut value {
            // the page replaces the `{href, total}` reference
            map.insert(
                "followers".to_string(),
                serde_json::to_value(&self.followers).map_err(S::Error::custom)?,
            );
            map.insert(
                "items".to_string(),
                serde_json::to_value(&self.items).map_err(S::Error::custom)?,
            );
        }
        value.serialize(serializer)
    }
}

impl Deref for FullPlaylist {
    type Target = SimplePlaylist;

    fn deref(&self) -> &SimplePlaylist {
        &self.playlist
    }
}
