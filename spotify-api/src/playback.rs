//! License acquisition and stream-location resolution.
//!
//! ## `get_playplay_license` — `POST /playplay/v1/key/{file_id}`
//!
//! The body is an opaque binary challenge produced by the caller's DRM
//! component; the response body is an opaque binary license. Neither is
//! interpreted here.
//!
//! ## `get_stream_urls` — `GET /storage-resolve/v2/files/audio/interactive/11/{file_id}`
//!
//! ```json
//! {
//!   "result": "CDN",
//!   "cdnurl": ["https://audio4-fa.scdn.co/audio/...?...", "..."],
//!   "fileid": "...",
//!   "ttl": 86400
//! }
//! ```
//!
//! `file_id` is the hex ID of one audio file, taken from the GID metadata
//! `file` list.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::types::StreamUrls;

impl SpotifyClient {
    /// Exchange a license challenge for a license blob.
    pub fn get_playplay_license(&mut self, file_id: &str, challenge: &[u8]) -> Result<Vec<u8>> {
        let url = self.config.license_endpoint(file_id);
        let response = self.session.post(&url, challenge.to_vec())?;
        Ok(response.bytes()?.to_vec())
    }

    /// Resolve CDN locations for an audio file.
    pub fn get_stream_urls(&mut self, file_id: &str) -> Result<StreamUrls> {
        let url = self.config.stream_urls_endpoint(file_id);
        Ok(self.session.get(&url)?.json()?)
    }
}
