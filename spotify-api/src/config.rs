//! Endpoint URLs and the fixed browser identity sent with every request.
//!
//! [`ApiConfig::default`] targets the production web player. Every base URL
//! can be replaced, which is how the integration tests point the client at a
//! local mock server.
//!
//! # Endpoints
//!
//! | Operation       | URL                                                          |
//! |-----------------|--------------------------------------------------------------|
//! | bootstrap       | `{home_page_url}`                                            |
//! | metadata        | `{metadata_url}/{type}/{id}`                                 |
//! | GID metadata    | `{spclient_url}/metadata/4/{media_type}/{gid}?market=from_token` |
//! | lyrics          | `{spclient_url}/color-lyrics/v2/track/{id}`                  |
//! | credits         | `{spclient_url}/track-credits-view/v0/experimental/{id}/credits` |
//! | license         | `{license_url}/playplay/v1/key/{file_id}`                    |
//! | stream location | `{storage_resolve_url}/storage-resolve/v2/files/audio/interactive/11/{file_id}?...` |

use std::path::PathBuf;
use std::time::Duration;

const HOME_PAGE_URL: &str = "https://open.spotify.com/";
const METADATA_URL: &str = "https://api.spotify.com/v1";
const SPCLIENT_URL: &str = "https://spclient.wg.spotify.com";
const LICENSE_URL: &str = "https://gew4-spclient.spotify.com";
const STORAGE_RESOLVE_URL: &str = "https://gue1-spclient.spotify.com";

const CLIENT_VERSION: &str = "1.2.46.25.g7f189073";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36";
const SEC_CH_UA: &str =
    r#""Not)A;Brand";v="99", "Google Chrome";v="127", "Chromium";v="127""#;

/// Pause between two collection page fetches.
const PAGE_DELAY: Duration = Duration::from_millis(500);

/// Client configuration.
///
/// Build with [`ApiConfig::default`] and adjust with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Landing page holding the `session` and `config` script blobs.
    pub home_page_url: String,
    /// Public Web API base (`/v1`).
    pub metadata_url: String,
    /// Internal spclient base (GID metadata, lyrics, credits).
    pub spclient_url: String,
    /// PlayPlay license issuance base.
    pub license_url: String,
    /// Storage-resolve base.
    pub storage_resolve_url: String,
    /// Value of the `spotify-app-version` header.
    pub client_version: String,
    /// Value of the `user-agent` header.
    pub user_agent: String,
    /// Delay before each continuation page fetch.
    pub page_delay: Duration,
    /// Netscape-format cookie file. `None` disables cookie loading.
    pub cookies_path: Option<PathBuf>,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            home_page_url: HOME_PAGE_URL.to_owned(),
            metadata_url: METADATA_URL.to_owned(),
            spclient_url: SPCLIENT_URL.to_owned(),
            license_url: LICENSE_URL.to_owned(),
            storage_resolve_url: STORAGE_RESOLVE_URL.to_owned(),
            client_version: CLIENT_VERSION.to_owned(),
            user_agent: USER_AGENT.to_owned(),
            page_delay: PAGE_DELAY,
            cookies_path: None,
            timeout: None,
        }
    }
}

impl ApiConfig {
    /// Point every endpoint at one base URL, e.g. a local mock server.
    ///
    /// The landing page becomes `{base}/`.
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.home_page_url = format!("{base}/");
        self.metadata_url = format!("{base}/v1");
        self.spclient_url = base.to_owned();
        self.license_url = base.to_owned();
        self.storage_resolve_url = base.to_owned();
        self
    }

    pub fn with_cookies_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookies_path = Some(path.into());
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = version.into();
        self
    }

    /// Fixed header set that mimics the desktop web player.
    ///
    /// The `Authorization` header is not part of it; the session installs it
    /// after bootstrap.
    pub fn default_headers(&self) -> Vec<(&'static str, String)> {
        let origin = self.home_page_url.clone();
        vec![
            ("accept", "application/json".to_owned()),
            ("accept-language", "en-US".to_owned()),
            ("content-type", "application/json".to_owned()),
            ("origin", origin.clone()),
            ("priority", "u=1, i".to_owned()),
            ("referer", origin),
            ("sec-ch-ua", SEC_CH_UA.to_owned()),
            ("sec-ch-ua-mobile", "?0".to_owned()),
            ("sec-ch-ua-platform", "\"Windows\"".to_owned()),
            ("sec-fetch-dest", "empty".to_owned()),
            ("sec-fetch-mode", "cors".to_owned()),
            ("sec-fetch-site", "same-site".to_owned()),
            ("user-agent", self.user_agent.clone()),
            ("spotify-app-version", self.client_version.clone()),
            ("app-platform", "WebPlayer".to_owned()),
        ]
    }

    pub(crate) fn metadata_endpoint(&self, kind: &str, id: &str) -> String {
        format!("{}/{kind}/{id}", self.metadata_url)
    }

    pub(crate) fn gid_metadata_endpoint(&self, media_type: &str, gid: &str) -> String {
        format!(
            "{}/metadata/4/{media_type}/{gid}?market=from_token",
            self.spclient_url
        )
    }

    pub(crate) fn lyrics_endpoint(&self, track_id: &str) -> String {
        format!("{}/color-lyrics/v2/track/{track_id}", self.spclient_url)
    }

    pub(crate) fn credits_endpoint(&self, track_id: &str) -> String {
        format!(
            "{}/track-credits-view/v0/experimental/{track_id}/credits",
            self.spclient_url
        )
    }

    pub(crate) fn license_endpoint(&self, file_id: &str) -> String {
        format!("{}/playplay/v1/key/{file_id}", self.license_url)
    }

    pub(crate) fn stream_urls_endpoint(&self, file_id: &str) -> String {
        format!(
            "{}/storage-resolve/v2/files/audio/interactive/11/{file_id}\
             ?version=10000000&product=9&platform=39&alt=json",
            self.storage_resolve_url
        )
    }
}
