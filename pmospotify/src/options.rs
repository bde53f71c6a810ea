//! Optional query parameters shared by the list and lookup endpoints
//!
//! Every endpoint documents which options it honors; the Web API ignores the
//! others. Options are collected in a [`RequestOptions`] builder:
//!
//! ```
//! use pmospotify::{RequestOptions, TimeRange};
//!
//! let opts = RequestOptions::new()
//!     .limit(50)
//!     .offset(100)
//!     .timerange(TimeRange::Long);
//!
//! assert_eq!(opts.encode(), "limit=50&offset=100&time_range=long_term");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Market value asking Spotify to use the country of the token's user
pub const MARKET_FROM_TOKEN: &str = "from_token";

/// Period over which top artists and tracks are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    /// Roughly the last 4 weeks
    Short,
    /// Roughly the last 6 months
    #[default]
    Medium,
    /// Roughly the last year
    Long,
}

impl TimeRange {
    /// Wire value of the `time_range` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item types a playlist listing may return besides tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionalType {
    Track,
    Episode,
}

impl AdditionalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionalType::Track => "track",
            AdditionalType::Episode => "episode",
        }
    }
}

/// Builder for the optional query parameters of a request
///
/// Setting the same option twice keeps the last value. Parameters are
/// encoded in key order so that a given set of options always produces the
/// same query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    params: BTreeMap<String, String>,
}

impl RequestOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// ISO 3166-1 alpha-2 country code, or [`MARKET_FROM_TOKEN`]
    ///
    /// Enables track relinking for the given market.
    pub fn market(self, market: impl Into<String>) -> Self {
        self.with("market", market)
    }

    /// ISO 3166-1 alpha-2 country code
    pub fn country(self, country: impl Into<String>) -> Self {
        self.with("country", country)
    }

    /// Maximum number of items to return
    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit.to_string())
    }

    /// Index of the first item to return
    pub fn offset(self, offset: u32) -> Self {
        self.with("offset", offset.to_string())
    }

    /// Period for the top artists/tracks endpoints
    pub fn timerange(self, range: TimeRange) -> Self {
        self.with("time_range", range.as_str())
    }

    /// Language of the response, e.g. `es_MX`
    pub fn locale(self, locale: impl Into<String>) -> Self {
        self.with("locale", locale)
    }

    /// Field filter for playlist endpoints, e.g. `items(added_at,item.name)`
    pub fn fields(self, fields: impl Into<String>) -> Self {
        self.with("fields", fields)
    }

    /// Cursor of the last item seen, for cursor-based pages
    pub fn after(self, cursor: impl Into<String>) -> Self {
        self.with("after", cursor)
    }

    /// Cursor of the first item seen, for cursor-based pages
    pub fn before(self, cursor: impl Into<String>) -> Self {
        self.with("before", cursor)
    }

    /// ISO 8601 timestamp (`yyyy-MM-ddTHH:mm:ss`)
    pub fn timestamp(self, timestamp: impl Into<String>) -> Self {
        self.with("timestamp", timestamp)
    }

    /// Item types accepted besides tracks (playlist listings)
    pub fn additional_types(self, types: &[AdditionalType]) -> Self {
        let joined = types
            .iter()
            .map(AdditionalType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.with("additional_types", joined)
    }

    /// Value currently set for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Check if no option is set
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode the options as an `application/x-www-form-urlencoded` string
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Set a parameter the endpoint itself requires (`type`, `ids`, ...)
    pub(crate) fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Replace the query of `url` with the encoded options
    pub(crate) fn apply_to(&self, url: &mut Url) {
        if self.params.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options() {
        let opts = RequestOptions::new();
        assert!(opts.is_empty());
        assert_eq!(opts.encode(), "");

        let mut url = Url::parse("https://api.spotify.com/v1/me/tracks").unwrap();
        opts.apply_to(&mut url);
        assert_eq!(url.as_str(), "https://api.spotify.com/v1/me/tracks");
    }

    #[test]
    fn test_keys_are_sorted() {
        let opts = RequestOptions::new()
            .limit(50)
            .after("0aV6DOiouImYTqrR5YlIqx")
            .with("type", "artist");
        assert_eq!(
            opts.encode(),
            "after=0aV6DOiouImYTqrR5YlIqx&limit=50&type=artist"
        );
    }

    #[test]
    fn test_last_value_wins() {
        let opts = RequestOptions::new().market("FR").market("SE");
        assert_eq!(opts.get("market"), Some("SE"));
        assert_eq!(opts.encode(), "market=SE");
    }

    #[test]
    fn test_values_are_escaped() {
        let opts = RequestOptions::new().fields("items(added_at,item.name)");
        assert_eq!(opts.encode(), "fields=items%28added_at%2Citem.name%29");
    }

    #[test]
    fn test_timerange_wire_values() {
        assert_eq!(TimeRange::default(), TimeRange::Medium);
        assert_eq!(TimeRange::Short.to_string(), "short_term");
        assert_eq!(
            RequestOptions::new().timerange(TimeRange::Long).get("time_range"),
            Some("long_term")
        );
    }

    #[test]
    fn test_additional_types() {
        let opts = RequestOptions::new()
            .additional_types(&[AdditionalType::Track, AdditionalType::Episode]);
        assert_eq!(opts.get("additional_types"), Some("track,episode"));
    }

    #[test]
    fn test_apply_replaces_query() {
        let mut url = Url::parse("https://api.spotify.com/v1/albums/x?stale=1").unwrap();
        RequestOptions::new()
            .market(MARKET_FROM_TOKEN)
            .apply_to(&mut url);
        assert_eq!(url.query(), Some("market=from_token"));
    }
}
