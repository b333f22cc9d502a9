//! Track, album, playlist, episode and show metadata.
//!
//! # Endpoints
//!
//! ## Public route — `GET /v1/{type}/{id}`
//!
//! Keyed by the 22-character public ID. Albums, playlists and shows embed
//! the first page of their children:
//!
//! ```json
//! {
//!   "id": "1A2GTWGtFfWp7KSQTwWOyo",
//!   "name": "...",
//!   "tracks": {
//!     "items": [ { "id": "...", "name": "...", "track_number": 1 } ],
//!     "next": "https://api.spotify.com/v1/albums/1A2GTWGtFfWp7KSQTwWOyo/tracks?offset=50&limit=50",
//!     "total": 120
//!   }
//! }
//! ```
//!
//! Shows use `episodes` instead of `tracks`. Playlist `tracks.items` wrap the
//! track in `{ "added_at": ..., "track": {...} }`.
//!
//! ## Internal route — `GET /metadata/4/{media_type}/{gid}?market=from_token`
//!
//! Keyed by the 32-character hex GID. Returns the extended metadata the
//! public route does not expose, such as the audio `file` list with
//! `file_id`s and `format`s.
//!
//! ## Credits — `GET /track-credits-view/v0/experimental/{id}/credits`
//!
//! ```json
//! { "trackUri": "spotify:track:...", "roleCredits": [ { "roleTitle": "Performers", "artists": [...] } ] }
//! ```

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::types::{GidMediaType, MediaType};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

impl SpotifyClient {
    /// Raw metadata for any public-route resource, without extension.
    pub fn metadata(&mut self, media_type: MediaType, id: &str) -> Result<Value> {
        let url = self.config.metadata_endpoint(media_type.path_segment(), id);
        self.get_json(&url)
    }

    /// Track metadata by public ID.
    pub fn get_track(&mut self, track_id: &str) -> Result<Value> {
        self.metadata(MediaType::Track, track_id)
    }

    /// Podcast episode metadata by public ID.
    pub fn get_episode(&mut self, episode_id: &str) -> Result<Value> {
        self.metadata(MediaType::Episode, episode_id)
    }

    /// Album metadata, with all `tracks` pages merged when `extend` is set.
    ///
    /// Results are cached per `(album_id, extend)` for the lifetime of the
    /// client: a repeated call returns the same [`Arc`] without a request.
    /// Failures are not cached.
    pub fn get_album(&mut self, album_id: &str, extend: bool) -> Result<Arc<Value>> {
        let key = (album_id.to_owned(), extend);
        if let Some(album) = self.album_cache.get(&key) {
            debug!(album_id, extend, "album cache hit");
            return Ok(Arc::clone(album));
        }
        let url = self
            .config
            .metadata_endpoint(MediaType::Album.path_segment(), album_id);
        let album = Arc::new(self.get_collection(&url, "tracks", extend)?);
        self.album_cache.insert(key, Arc::clone(&album));
        Ok(album)
    }

    /// Playlist metadata, with all `tracks` pages merged when `extend` is set.
    pub fn get_playlist(&mut self, playlist_id: &str, extend: bool) -> Result<Value> {
        let url = self
            .config
            .metadata_endpoint(MediaType::Playlist.path_segment(), playlist_id);
        self.get_collection(&url, "tracks", extend)
    }

    /// Show metadata, with all `episodes` pages merged when `extend` is set.
    pub fn get_show(&mut self, show_id: &str, extend: bool) -> Result<Value> {
        let url = self
            .config
            .metadata_endpoint(MediaType::Show.path_segment(), show_id);
        self.get_collection(&url, "episodes", extend)
    }

    /// Extended metadata keyed by hex GID.
    ///
    /// Use [`crate::id::to_internal`] to get a GID from a public ID.
    pub fn get_gid_metadata(&mut self, gid: &str, media_type: GidMediaType) -> Result<Value> {
        let url = self
            .config
            .gid_metadata_endpoint(media_type.path_segment(), gid);
        self.get_json(&url)
    }

    /// Credits (performers, writers, producers) of a track.
    pub fn get_track_credits(&mut self, track_id: &str) -> Result<Value> {
        let url = self.config.credits_endpoint(track_id);
        self.get_json(&url)
    }
}
