use super::{
    null_default, numeric, FullArtist, FullTrack, PlaylistTrack, SavedAlbum, SavedShow,
    SavedTrack, SimpleAlbum, SimpleEpisode, SimplePlaylist, SimpleTrack,
};
use serde::{Deserialize, Serialize};

/// Offset-based page of results
///
/// Every metadata field defaults when absent, so `{}` decodes as an empty
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Web API endpoint returning this page
    #[serde(default, deserialize_with = "null_default")]
    pub href: String,
    /// Maximum number of items in the page
    #[serde(default, deserialize_with = "numeric")]
    pub limit: u32,
    /// Offset of the first item of the page
    #[serde(default, deserialize_with = "numeric")]
    pub offset: u32,
    /// Number of items available server side
    #[serde(default, deserialize_with = "numeric")]
    pub total: u32,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            limit: 0,
            offset: 0,
            total: 0,
            next: None,
            previous: None,
            items: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Check if more items are available after this page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Position markers of a cursor-based page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursor {
    /// Key of the last item returned, to pass as `after`
    pub after: Option<String>,
    /// Key of the first item returned, to pass as `before`
    pub before: Option<String>,
}

/// Cursor-based page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorPage<T> {
    #[serde(default, deserialize_with = "null_default")]
    pub href: String,
    #[serde(default, deserialize_with = "numeric")]
    pub limit: u32,
    #[serde(default, deserialize_with = "numeric")]
    pub total: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub cursors: Cursor,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for CursorPage<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            limit: 0,
            total: 0,
            next: None,
            cursors: Cursor::default(),
            items: Vec::new(),
        }
    }
}

impl<T> CursorPage<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub type SimpleAlbumPage = Page<SimpleAlbum>;
pub type SavedAlbumPage = Page<SavedAlbum>;
pub type SimpleTrackPage = Page<SimpleTrack>;
pub type FullTrackPage = Page<FullTrack>;
pub type SavedTrackPage = Page<SavedTrack>;
pub type PlaylistItemPage = Page<PlaylistTrack>;
pub type FullArtistPage = Page<FullArtist>;
pub type SimplePlaylistPage = Page<SimplePlaylist>;
pub type SimpleEpisodePage = Page<SimpleEpisode>;
pub type SavedShowPage = Page<SavedShow>;
pub type FullArtistCursorPage = CursorPage<FullArtist>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_page() {
        let page: SavedTrackPage = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_next());

        let cursor: FullArtistCursorPage = serde_json::from_str("{}").unwrap();
        assert!(cursor.cursors.after.is_none());
    }

    #[test]
    fn test_page_metadata() {
        let page: SimpleTrackPage = serde_json::from_str(
            r#"{
                "href": "https://api.spotify.com/v1/albums/x/tracks?offset=0&limit=1",
                "items": [{"name": "Money Changes Everything", "track_number": 1}],
                "limit": 1,
                "next": "https://api.spotify.com/v1/albums/x/tracks?offset=1&limit=1",
                "offset": 0,
                "previous": null,
                "total": 13
            }"#,
        )
        .unwrap();
        assert_eq!(page.total, 13);
        assert_eq!(page.len(), 1);
        assert!(page.has_next());
        assert!(page.previous.is_none());
        assert_eq!(page.items[0].name, "Money Changes Everything");
    }

    #[test]
    fn test_cursor_page() {
        let page: FullArtistCursorPage = serde_json::from_str(
            r#"{"items": [], "next": null, "total": 183, "cursors": {"after": "0aV6DOiouImYTqrR5YlIqx"}, "limit": 20}"#,
        )
        .unwrap();
        assert_eq!(page.cursors.after.as_deref(), Some("0aV6DOiouImYTqrR5YlIqx"));
        assert_eq!(page.total, 183);
    }
}
