//! Spotify settings stored in pmoconfig
//!
//! The [`SpotifyConfigExt`] trait adds typed accessors for the `spotify`
//! section of the configuration file:
//!
//! ```yaml
//! spotify:
//!   api_base: https://api.spotify.com/v1/
//!   timeout_secs: 30
//!   access_token: BQD...
//!   market: FR
//! ```
//!
//! Getters persist the default value when the key is missing, so the
//! configuration file documents every setting after the first run. Every
//! key can be overridden from the environment, e.g.
//! `PMOSPOTIFY_CONFIG__SPOTIFY__ACCESS_TOKEN`.
//!
//! # Example
//!
//! ```no_run
//! use pmoconfig::get_config;
//! use pmospotify::SpotifyConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! config.set_spotify_market(Some("FR"))?;
//! println!("Using {}", config.get_spotify_api_base()?);
//! # Ok(())
//! # }
//! ```

use crate::client::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS};
use anyhow::{anyhow, Result};
use pmoconfig::Config;
use serde_yaml::Value;

const API_BASE: &[&str] = &["spotify", "api_base"];
const TIMEOUT_SECS: &[&str] = &["spotify", "timeout_secs"];
const ACCESS_TOKEN: &[&str] = &["spotify", "access_token"];
const MARKET: &[&str] = &["spotify", "market"];

/// Extension trait for the Spotify section of `pmoconfig::Config`
pub trait SpotifyConfigExt {
    /// Web API base URL (default: `https://api.spotify.com/v1/`)
    fn get_spotify_api_base(&self) -> Result<String>;
    fn set_spotify_api_base(&self, url: &str) -> Result<()>;

    /// Request timeout in seconds (default: 30)
    fn get_spotify_timeout_secs(&self) -> Result<u64>;
    fn set_spotify_timeout_secs(&self, secs: u64) -> Result<()>;

    /// Bearer token, if one has been stored
    fn get_spotify_access_token(&self) -> Result<Option<String>>;
    fn set_spotify_access_token(&self, token: Option<&str>) -> Result<()>;

    /// Preferred market for catalog lookups, if any
    fn get_spotify_market(&self) -> Result<Option<String>>;
    fn set_spotify_market(&self, market: Option<&str>) -> Result<()>;
}

impl SpotifyConfigExt for Config {
    fn get_spotify_api_base(&self) -> Result<String> {
        match self.get_value(API_BASE) {
            Ok(Value::String(url)) if !url.is_empty() => Ok(url),
            _ => {
                self.set_spotify_api_base(DEFAULT_API_BASE)?;
                Ok(DEFAULT_API_BASE.to_string())
            }
        }
    }

    fn set_spotify_api_base(&self, url: &str) -> Result<()> {
        self.set_value(API_BASE, Value::String(url.to_string()))
    }

    fn get_spotify_timeout_secs(&self) -> Result<u64> {
        match self.get_value(TIMEOUT_SECS) {
            Ok(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| anyhow!("spotify.timeout_secs must be a positive integer, got {}", n)),
            _ => {
                self.set_spotify_timeout_secs(DEFAULT_REQUEST_TIMEOUT_SECS)?;
                Ok(DEFAULT_REQUEST_TIMEOUT_SECS)
            }
        }
    }

    fn set_spotify_timeout_secs(&self, secs: u64) -> Result<()> {
        self.set_value(TIMEOUT_SECS, Value::Number(secs.into()))
    }

    fn get_spotify_access_token(&self) -> Result<Option<String>> {
        optional_string(self, ACCESS_TOKEN)
    }

    fn set_spotify_access_token(&self, token: Option<&str>) -> Result<()> {
        set_optional_string(self, ACCESS_TOKEN, token)
    }

    fn get_spotify_market(&self) -> Result<Option<String>> {
        optional_string(self, MARKET)
    }

    fn set_spotify_market(&self, market: Option<&str>) -> Result<()> {
        set_optional_string(self, MARKET, market)
    }
}

fn optional_string(config: &Config, path: &[&str]) -> Result<Option<String>> {
    match config.get_value(path) {
        Ok(Value::String(s)) if !s.is_empty() => Ok(Some(s)),
        Ok(Value::Null) | Err(_) => Ok(None),
        Ok(Value::String(_)) => Ok(None),
        Ok(other) => Err(anyhow!(
            "{} must be a string, got {:?}",
            path.join("."),
            other
        )),
    }
}

fn set_optional_string(config: &Config, path: &[&str], value: Option<&str>) -> Result<()> {
    let value = match value {
        Some(s) => Value::String(s.to_string()),
        None => Value::Null,
    };
    config.set_value(path, value)
}
