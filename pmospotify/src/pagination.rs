//! Following the `next` / `previous` links of paged answers

use crate::client::SpotifyClient;
use crate::error::{Error, Result};
use crate::models::{CursorPage, Page};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// A paged answer that links to its neighbours
pub trait Pageable {
    /// Absolute URL of the following page, if any
    fn next_url(&self) -> Option<&str>;

    /// Absolute URL of the preceding page, if any
    fn previous_url(&self) -> Option<&str>;
}

impl<T> Pageable for Page<T> {
    fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }

    fn previous_url(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}

impl<T> Pageable for CursorPage<T> {
    fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Cursor pages only move forward
    fn previous_url(&self) -> Option<&str> {
        None
    }
}

impl SpotifyClient {
    /// Fetch the page following `page`
    ///
    /// Returns [`Error::NoMorePages`] without any request when `page` is the
    /// last one.
    ///
    /// ```no_run
    /// # async fn run(client: pmospotify::SpotifyClient) -> pmospotify::Result<()> {
    /// use pmospotify::{Error, RequestOptions};
    ///
    /// let mut page = client.current_users_tracks(RequestOptions::new().limit(50)).await?;
    /// loop {
    ///     for saved in &page.items {
    ///         println!("{}", saved.name);
    ///     }
    ///     match client.next_page(&page).await {
    ///         Ok(next) => page = next,
    ///         Err(Error::NoMorePages) => break,
    ///         Err(e) => return Err(e),
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn next_page<P>(&self, page: &P) -> Result<P>
    where
        P: Pageable + DeserializeOwned,
    {
        self.follow(page.next_url()).await
    }

    /// Fetch the page preceding `page`
    pub async fn previous_page<P>(&self, page: &P) -> Result<P>
    where
        P: Pageable + DeserializeOwned,
    {
        self.follow(page.previous_url()).await
    }

    async fn follow<P: DeserializeOwned>(&self, link: Option<&str>) -> Result<P> {
        let link = link.filter(|l| !l.is_empty()).ok_or(Error::NoMorePages)?;
        debug!("Following page link {}", link);
        let body: Value = self.get(Url::parse(link)?).await?;
        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }
}

/// Strip the `{"artists": {...}}` style wrapper some list endpoints use
///
/// Their `next` links answer with the same wrapper as the first request.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.len() == 1 && !map.contains_key("items") => {
            let is_page = map
                .values()
                .next()
                .and_then(Value::as_object)
                .is_some_and(|inner| inner.contains_key("items"));
            match map.keys().next().cloned() {
                Some(key) if is_page => map.remove(&key).unwrap_or(Value::Null),
                _ => Value::Object(map),
            }
        }
        other => other,
    }
}
