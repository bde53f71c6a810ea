//! HTTP client for the Spotify Web API
//!
//! [`SpotifyClient`] owns the HTTP connection pool, the bearer token and the
//! shared request executor. The endpoint methods live in the `api` modules
//! as `impl SpotifyClient` blocks.
//!
//! # Example
//!
//! ```no_run
//! use pmospotify::{Id, RequestOptions, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotifyClient::new("BQD...access-token")?;
//!
//!     let album = client
//!         .get_album(&Id::from("0sNOF9WDwhWunNAHPD3Baj"), RequestOptions::new().market("US"))
//!         .await?;
//!     println!("{} ({} tracks)", album.name, album.total_tracks);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Cancellation
//!
//! A client bound to a [`CancellationToken`] through
//! [`SpotifyClient::with_cancellation`] races every request against the
//! token. Cancelling the token drops the in-flight request and the call
//! returns [`Error::Cancelled`].
//!
//! ```
//! use pmospotify::{CancellationToken, Error, SpotifyClient};
//!
//! # tokio_test::block_on(async {
//! let token = CancellationToken::new();
//! let client = SpotifyClient::new("BQD...")?.with_cancellation(token.clone());
//!
//! token.cancel();
//! assert!(matches!(client.current_user().await, Err(Error::Cancelled)));
//! # Ok::<(), Error>(())
//! # }).unwrap();
//! ```

use crate::error::{Error, Result};
use crate::options::RequestOptions;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Default Spotify Web API base URL
pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1/";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "pmospotify/0.1.0";

/// Spotify Web API client
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    pub(crate) client: Client,
    base_url: Url,
    access_token: Option<String>,
    cancel: Option<CancellationToken>,
}

impl SpotifyClient {
    /// Create a client with default settings and the given access token
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// The reqwest client is used as is: timeouts and default headers must
    /// be configured on it. No access token is set.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: default_base_url(),
            access_token: None,
            cancel: None,
        }
    }

    /// Create a client from the pmoconfig settings
    ///
    /// Reads the API base URL, the request timeout and the access token
    /// from the `spotify` section of the configuration.
    #[cfg(feature = "pmoconfig")]
    pub fn from_config() -> Result<Self> {
        use crate::config_ext::SpotifyConfigExt;

        let config = pmoconfig::get_config();
        let mut builder = Self::builder()
            .base_url(config.get_spotify_api_base()?)
            .timeout(Duration::from_secs(config.get_spotify_timeout_secs()?));

        if let Some(token) = config.get_spotify_access_token()? {
            builder = builder.access_token(token);
        }

        builder.build()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Get the bearer token, if one is set
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Replace the bearer token (e.g. after a refresh)
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    /// Clone the client, binding every request to `token`
    ///
    /// Requests issued through the returned client fail with
    /// [`Error::Cancelled`] as soon as the token is cancelled, including
    /// requests already in flight.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut cloned = self.clone();
        cloned.cancel = Some(token);
        cloned
    }

    /// Cancellation token bound to this client, if any
    pub fn cancellation_token(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    // ========================================================================
    // URL building
    // ========================================================================

    /// Build an endpoint URL from path segments and query options
    ///
    /// Segments are percent-encoded, so ids can be passed verbatim.
    pub(crate) fn endpoint(&self, segments: &[&str], options: &RequestOptions) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::other(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        options.apply_to(&mut url);
        Ok(url)
    }

    // ========================================================================
    // Request execution
    // ========================================================================

    /// GET `url` and decode the JSON body
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let request = self.client.get(url.clone());
        let body = self.execute(Method::GET, &url, request).await?;
        Self::decode(body)
    }

    /// PUT a JSON body to `url`, ignoring any response body
    pub(crate) async fn put<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<()> {
        let request = self.client.put(url.clone()).json(body);
        self.execute(Method::PUT, &url, request).await?;
        Ok(())
    }

    /// DELETE `url` with a JSON body, ignoring any response body
    pub(crate) async fn delete<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<()> {
        let request = self.client.delete(url.clone()).json(body);
        self.execute(Method::DELETE, &url, request).await?;
        Ok(())
    }

    /// Send a request, racing it against the cancellation token
    ///
    /// Returns the response body, or `None` for `204 No Content` and empty
    /// bodies.
    async fn execute(
        &self,
        method: Method,
        url: &Url,
        mut request: RequestBuilder,
    ) -> Result<Option<String>> {
        if let Some(ref token) = self.access_token {
            request = request.bearer_auth(token);
        }

        debug!("{} {}", method, url);

        let send = async {
            let response = request.send().await?;
            Self::handle_response(response).await
        };

        match self.cancel {
            Some(ref token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("{} {} cancelled", method, url);
                        Err(Error::Cancelled)
                    }
                    result = send => result,
                }
            }
            None => send.await,
        }
    }

    /// Map the HTTP response to a body or an API error
    async fn handle_response(response: Response) -> Result<Option<String>> {
        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            let err = Error::from_status(status, &text);
            warn!("Spotify API error: {}", err);
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(text))
    }

    fn decode<T: DeserializeOwned>(body: Option<String>) -> Result<T> {
        let text = body.ok_or(Error::NoContent)?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("Failed to parse response: {}", e);
            Error::Json(e)
        })
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("DEFAULT_API_BASE is a valid URL")
}

/// Parse a base URL, making sure it ends with a slash
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = if raw.ends_with('/') {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("{raw}/"))?
    };

    if url.cannot_be_a_base() {
        return Err(Error::other(format!("{raw} cannot be a base URL")));
    }

    Ok(url)
}

/// Builder for configuring a SpotifyClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    access_token: Option<String>,
    timeout: Duration,
    user_agent: String,
    proxy: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_API_BASE.to_string(),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    ///
    /// Timeout, User-Agent and proxy settings are ignored in that case.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the API base URL (useful for tests and proxies)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token sent with every request
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SpotifyClient> {
        let base_url = parse_base_url(&self.base_url)?;

        let client = if let Some(client) = self.client {
            client
        } else {
            let mut builder = Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout);

            if let Some(proxy_url) = &self.proxy {
                let proxy = reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::other(format!("Invalid proxy: {}", e)))?;
                builder = builder.proxy(proxy);
            }

            builder.build()?
        };

        Ok(SpotifyClient {
            client,
            base_url,
            access_token: self.access_token,
            cancel: None,
        })
    }
}
