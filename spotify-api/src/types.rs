//! Data types for Spotify web-player responses.
//!
//! Resource metadata (tracks, albums, credits, ...) is returned as raw
//! [`serde_json::Value`]: the shapes are large, change often and callers
//! usually want only a handful of fields. The types here cover the parts this
//! crate itself has to understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Contents of the landing page `<script id="session">` blob.
///
/// API JSON fields: `accessToken`, `accessTokenExpirationTimestampMs`,
/// `isAnonymous`, `clientId`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// Bearer token for every authenticated request.
    pub access_token: String,
    /// Absolute expiry, Unix milliseconds.
    pub access_token_expiration_timestamp_ms: i64,
    /// `true` when no logged-in cookies were presented.
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub client_id: Option<String>,
    /// Everything else in the blob.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for SessionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionInfo")
            .field("access_token", &"<redacted>")
            .field(
                "access_token_expiration_timestamp_ms",
                &self.access_token_expiration_timestamp_ms,
            )
            .field("is_anonymous", &self.is_anonymous)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// One page of a paginated collection.
///
/// Returned by the Web API both embedded (`album.tracks`, `show.episodes`)
/// and from the `next` URL of a previous page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionPage {
    /// Resource summaries on this page, in order.
    pub items: Vec<Value>,
    /// URL of the following page; `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Storage-resolve answer for one audio file.
///
/// API JSON fields: `result` (`"CDN"` on success), `cdnurl` (array),
/// `fileid`, `ttl` (seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamUrls {
    pub result: String,
    /// Candidate CDN URLs, best first.
    #[serde(default)]
    pub cdnurl: Vec<String>,
    #[serde(default)]
    pub fileid: Option<String>,
    /// Seconds the URLs stay valid.
    #[serde(default)]
    pub ttl: Option<u64>,
}

/// Resource kind on the public metadata route (`/v1/{kind}/{id}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Track,
    Album,
    Playlist,
    Episode,
    Show,
}

impl MediaType {
    /// Path segment used by the Web API.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Track => "tracks",
            Self::Album => "albums",
            Self::Playlist => "playlists",
            Self::Episode => "episodes",
            Self::Show => "shows",
        }
    }
}

/// Resource kind on the internal `/metadata/4/{kind}/{gid}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GidMediaType {
    Track,
    Episode,
    Album,
    Artist,
    Show,
}

impl GidMediaType {
    /// Singular path segment used by the internal metadata route.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Episode => "episode",
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Show => "show",
        }
    }
}
