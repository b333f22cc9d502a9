//! Blocking client for the Spotify web-player APIs.
//!
//! Every fetcher has the same shape:
//!
//! 1. [`Session::ensure_valid`] renews the bearer token if it expired
//! 2. one request against the endpoint for that resource kind
//! 3. the response goes through [`check`](crate::check::check)
//! 4. the body is decoded and returned
//!
//! Non-2xx statuses are mapped to
//! [`SpotifyError::RemoteRequestFailed`](crate::SpotifyError::RemoteRequestFailed),
//! except a lyrics 404 which means "no lyrics".

use crate::config::ApiConfig;
use crate::error::Result;
use crate::pages::Pages;
use crate::session::Session;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Album cache key: `(album_id, extend)`.
pub(crate) type AlbumKey = (String, bool);

/// Blocking client for the Spotify web player.
///
/// Holds the [`Session`] and the album cache. API methods are implemented in
/// separate modules (`metadata`, `lyrics`, `playback`) as
/// `impl SpotifyClient` blocks.
pub struct SpotifyClient {
    pub(crate) session: Session,
    pub(crate) config: ApiConfig,
    /// Lives as long as the client; entries are never evicted.
    pub(crate) album_cache: HashMap<AlbumKey, Arc<Value>>,
}

impl SpotifyClient {
    /// Create a client with production endpoints and cookies from `cookies_path`.
    pub fn new(cookies_path: Option<&std::path::Path>) -> Result<Self> {
        let mut config = ApiConfig::default();
        if let Some(path) = cookies_path {
            config = config.with_cookies_path(path);
        }
        Self::with_config(config)
    }

    /// Create a client with an explicit [`ApiConfig`] (useful for testing
    /// against a local server).
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        let session = Session::new(&config)?;
        Ok(Self {
            session,
            config,
            album_cache: HashMap::new(),
        })
    }

    /// Return a reference to the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Renew the access token now if it has expired.
    pub fn ensure_valid(&mut self) -> Result<()> {
        self.session.ensure_valid()
    }

    /// The decoded landing-page `config` blob.
    pub fn config_info(&self) -> &Value {
        self.session.config_info()
    }

    /// Fetch the landing page HTML.
    pub fn home_page(&self) -> Result<String> {
        self.session.home_page()
    }

    /// Continuation pages of `resource[key]`, e.g. `album["tracks"]`.
    ///
    /// The embedded first page is not repeated; only pages reachable through
    /// its `next` link are fetched. Yields nothing when `next` is absent.
    pub fn extend_collection(&mut self, resource: &Value, key: &str) -> Pages<'_> {
        let next = resource[key]["next"].as_str().map(String::from);
        Pages::new(&mut self.session, next, self.config.page_delay)
    }

    /// Number of cached album responses.
    pub fn cached_albums(&self) -> usize {
        self.album_cache.len()
    }

    /// Authenticated GET decoded as JSON.
    pub(crate) fn get_json(&mut self, url: &str) -> Result<Value> {
        Ok(self.session.get(url)?.json()?)
    }

    /// Fetch `resource` and, if `extend`, append every continuation page of
    /// `resource[key]` to its `items`.
    ///
    /// A collection without an `items` array is returned as fetched; its
    /// continuation pages would have nowhere to go, so none are requested.
    pub(crate) fn get_collection(&mut self, url: &str, key: &str, extend: bool) -> Result<Value> {
        let mut resource = self.get_json(url)?;
        if !extend {
            return Ok(resource);
        }
        if !resource[key]["items"].is_array() {
            debug!(key, "collection has no items array, not extending");
            return Ok(resource);
        }
        let more = self.extend_collection(&resource, key).collect_items()?;
        if let Some(Value::Array(items)) = resource
            .get_mut(key)
            .and_then(|collection| collection.get_mut("items"))
        {
            items.extend(more);
        }
        Ok(resource)
    }
}
