//! Spotify web-player API client library.
//!
//! Authenticates the way the browser player does, from the landing page of
//! a cookie session, and exposes metadata, lyrics, credits, license and
//! stream-location endpoints.
//!
//! # Authentication
//!
//! Cookies exported from a logged-in browser (`cookies.txt`, Netscape
//! format) are loaded once. Without them the session is anonymous, which is
//! enough for public metadata. The bearer token scraped from the landing page
//! is renewed lazily whenever a request finds it expired.
//!
//! ```no_run
//! use spotify_api::SpotifyClient;
//! use std::path::Path;
//!
//! let mut client = SpotifyClient::new(Some(Path::new("cookies.txt"))).unwrap();
//! let album = client.get_album("1A2GTWGtFfWp7KSQTwWOyo", true).unwrap();
//! println!("{}", album["name"]);
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                     | Endpoint                                   | Description            |
//! |--------------------------------------------|--------------------------------------------|------------------------|
//! | [`SpotifyClient::get_track`]               | `/v1/tracks/{id}`                          | Track metadata         |
//! | [`SpotifyClient::get_album`]               | `/v1/albums/{id}` + `next` pages           | Album with all tracks  |
//! | [`SpotifyClient::get_playlist`]            | `/v1/playlists/{id}` + `next` pages        | Playlist with tracks   |
//! | [`SpotifyClient::get_episode`]             | `/v1/episodes/{id}`                        | Episode metadata       |
//! | [`SpotifyClient::get_show`]                | `/v1/shows/{id}` + `next` pages            | Show with episodes     |
//! | [`SpotifyClient::get_gid_metadata`]        | `/metadata/4/{type}/{gid}`                 | Extended metadata      |
//! | [`SpotifyClient::get_lyrics`]              | `/color-lyrics/v2/track/{id}`              | Synced lyrics          |
//! | [`SpotifyClient::get_track_credits`]       | `/track-credits-view/v0/experimental/...`  | Track credits          |
//! | [`SpotifyClient::get_playplay_license`]    | `POST /playplay/v1/key/{file_id}`          | License blob           |
//! | [`SpotifyClient::get_stream_urls`]         | `/storage-resolve/v2/files/audio/...`      | CDN URLs               |
//!
//! # Identifiers
//!
//! Public IDs and internal GIDs convert with [`id::to_internal`] and
//! [`id::to_public`].

pub mod check;
pub mod client;
pub mod config;
pub mod cookies;
pub mod error;
pub mod id;
mod lyrics;
mod metadata;
pub mod pages;
mod playback;
pub mod session;
pub mod types;

pub use client::SpotifyClient;
pub use config::ApiConfig;
pub use error::{Result, SpotifyError};
pub use pages::Pages;
pub use session::Session;
