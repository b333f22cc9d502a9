//! Synced lyrics.
//!
//! Endpoint: `GET /color-lyrics/v2/track/{track_id}`
//!
//! Response:
//! ```json
//! {
//!   "lyrics": {
//!     "syncType": "LINE_SYNCED",
//!     "lines": [ { "startTimeMs": "1230", "words": "..." } ]
//!   },
//!   "colors": { ... }
//! }
//! ```
//!
//! A track without lyrics answers `404`, which is reported as `Ok(None)`.
//! Every other endpoint treats `404` as an error.

use crate::check::check;
use crate::client::SpotifyClient;
use crate::error::Result;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

impl SpotifyClient {
    /// Get lyrics for a track, `None` if the track has none.
    pub fn get_lyrics(&mut self, track_id: &str) -> Result<Option<Value>> {
        let url = self.config.lyrics_endpoint(track_id);
        let response = self.session.send(Method::GET, &url, None)?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(track_id, "no lyrics");
            return Ok(None);
        }
        let lyrics = check(response, &format!("GET {url}"))?.json()?;
        Ok(Some(lyrics))
    }
}
