//! Browser-session authentication.
//!
//! The web player does not use an OAuth flow. Its landing page, fetched with
//! the user's browser cookies, embeds two JSON blobs in inline scripts:
//!
//! ```html
//! <script id="session" data-testid="session" type="application/json">
//!   {"accessToken":"BQC...","accessTokenExpirationTimestampMs":1700000000000,"isAnonymous":false}
//! </script>
//! <script id="config" data-testid="config" type="application/json">{...}</script>
//! ```
//!
//! The `accessToken` becomes the `Authorization: Bearer` header. When it
//! expires, the landing page is fetched again over the same cookie jar; there
//! is no background timer, expiry is only noticed by [`Session::ensure_valid`]
//! right before a request goes out.

use crate::check::check;
use crate::config::ApiConfig;
use crate::cookies;
use crate::error::{Result, SpotifyError};
use crate::types::SessionInfo;
use chrono::Utc;
use reqwest::blocking::{Client, Response};
use reqwest::cookie::Jar;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// An authenticated web-player session.
///
/// Owns the HTTP client, its cookie jar, the request headers and the current
/// access token. All request paths take `&mut self` because any of them may
/// renew the token; a session is meant to be driven from one thread.
pub struct Session {
    http: Client,
    headers: HeaderMap,
    home_page_url: String,
    info: SessionInfo,
    config_info: Value,
}

impl Session {
    /// Load cookies, set the browser headers and perform the first bootstrap.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Io`] / [`SpotifyError::CookieFile`] — unreadable cookie file
    /// - [`SpotifyError::Http`] / [`SpotifyError::RemoteRequestFailed`] — landing page unreachable
    /// - [`SpotifyError::AuthenticationBootstrapFailed`] — landing page without token
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let jar = match &config.cookies_path {
            Some(path) => {
                let loaded = cookies::load(path)?;
                debug!(count = loaded.len(), path = %path.display(), "loaded cookies");
                cookies::jar(&loaded)?
            }
            None => Jar::default(),
        };

        let mut builder = Client::builder().cookie_provider(Arc::new(jar));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let mut headers = HeaderMap::new();
        for (name, value) in config.default_headers() {
            headers.insert(HeaderName::from_static(name), header_value(&value)?);
        }

        let home_page_url = config.home_page_url.clone();
        let (info, config_info) = bootstrap(&http, &headers, &home_page_url)?;
        let mut session = Self {
            http,
            headers,
            home_page_url,
            info,
            config_info,
        };
        session.install_token()?;
        Ok(session)
    }

    /// Renew the access token if it has expired.
    ///
    /// Cheap when the token is still valid. This is the only place that
    /// changes authentication state after construction; the cookie jar is
    /// kept as is.
    pub fn ensure_valid(&mut self) -> Result<()> {
        if !self.is_expired() {
            return Ok(());
        }
        info!(
            expired_at = self.info.access_token_expiration_timestamp_ms,
            "access token expired, renewing"
        );
        let (info, config_info) = bootstrap(&self.http, &self.headers, &self.home_page_url)?;
        self.info = info;
        self.config_info = config_info;
        self.install_token()
    }

    /// Whether the current token's expiry has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.info.access_token_expiration_timestamp_ms
    }

    /// Token expiry in Unix milliseconds.
    pub fn expires_at_ms(&self) -> i64 {
        self.info.access_token_expiration_timestamp_ms
    }

    /// The decoded `session` blob from the last bootstrap.
    pub fn session_info(&self) -> &SessionInfo {
        &self.info
    }

    /// The decoded `config` blob from the last bootstrap.
    pub fn config_info(&self) -> &Value {
        &self.config_info
    }

    /// Fetch the landing page HTML without touching the session state.
    pub fn home_page(&self) -> Result<String> {
        fetch_home_page(&self.http, &self.headers, &self.home_page_url)
    }

    /// Authenticated GET, classified.
    pub fn get(&mut self, url: &str) -> Result<Response> {
        let response = self.send(Method::GET, url, None)?;
        check(response, &format!("GET {url}"))
    }

    /// Authenticated POST with a raw body, classified.
    pub fn post(&mut self, url: &str, body: Vec<u8>) -> Result<Response> {
        let response = self.send(Method::POST, url, Some(body))?;
        check(response, &format!("POST {url}"))
    }

    /// Authenticated request whose status is left to the caller.
    ///
    /// Used where a non-2xx status is a legitimate answer (lyrics 404).
    pub fn send(&mut self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<Response> {
        self.ensure_valid()?;
        debug!(%method, url, "request");
        let mut request = self
            .http
            .request(method, url)
            .headers(self.headers.clone());
        if let Some(body) = body {
            request = request.body(body);
        }
        Ok(request.send()?)
    }

    fn install_token(&mut self) -> Result<()> {
        let bearer = header_value(&format!("Bearer {}", self.info.access_token))?;
        self.headers.insert(AUTHORIZATION, bearer);
        info!(
            expires_at = self.info.access_token_expiration_timestamp_ms,
            anonymous = self.info.is_anonymous,
            "session token installed"
        );
        Ok(())
    }
}

fn bootstrap(http: &Client, headers: &HeaderMap, url: &str) -> Result<(SessionInfo, Value)> {
    let html = fetch_home_page(http, headers, url)?;

    let session_json = script_blob(&html, "session").ok_or_else(|| {
        SpotifyError::AuthenticationBootstrapFailed("no session script on landing page".into())
    })?;
    let info: SessionInfo = serde_json::from_str(session_json).map_err(|e| {
        SpotifyError::AuthenticationBootstrapFailed(format!("undecodable session blob: {e}"))
    })?;

    let config_json = script_blob(&html, "config").ok_or_else(|| {
        SpotifyError::AuthenticationBootstrapFailed("no config script on landing page".into())
    })?;
    let config_info: Value = serde_json::from_str(config_json).map_err(|e| {
        SpotifyError::AuthenticationBootstrapFailed(format!("undecodable config blob: {e}"))
    })?;

    Ok((info, config_info))
}

fn fetch_home_page(http: &Client, headers: &HeaderMap, url: &str) -> Result<String> {
    debug!(url, "fetching landing page");
    let response = http.get(url).headers(headers.clone()).send()?;
    Ok(check(response, &format!("GET {url}"))?.text()?)
}

/// Body of the first `<script id="{id}" ...>` element, if non-empty.
fn script_blob<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let id_attr = format!("id=\"{id}\"");
    let mut rest = html;
    while let Some(start) = rest.find("<script") {
        rest = &rest[start..];
        let tag_end = rest.find('>')?;
        let tag = &rest[..tag_end];
        let after_tag = &rest[tag_end + 1..];
        if has_attribute(tag, &id_attr) {
            let body_end = after_tag.find("</script>")?;
            let body = after_tag[..body_end].trim();
            return (!body.is_empty()).then_some(body);
        }
        rest = after_tag;
    }
    None
}

/// `attr` appears as a whole attribute, not as the tail of `data-testid=` and the like.
fn has_attribute(tag: &str, attr: &str) -> bool {
    tag.match_indices(attr)
        .any(|(at, _)| tag[..at].ends_with(|c: char| c.is_ascii_whitespace()))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| SpotifyError::InvalidConfig(format!("header value {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html><head>
<script src="/app.js"></script>
<script id="config" data-testid="config" type="application/json">{"correlationId":"abc","market":"US"}</script>
<script id="session" data-testid="session" type="application/json">{"accessToken":"BQC","accessTokenExpirationTimestampMs":1700000000000,"isAnonymous":false}</script>
</head></html>"#;

    #[test]
    fn finds_both_blobs_regardless_of_order() {
        let session = script_blob(PAGE, "session").unwrap();
        assert!(session.starts_with("{\"accessToken\""));
        let config = script_blob(PAGE, "config").unwrap();
        assert_eq!(config, r#"{"correlationId":"abc","market":"US"}"#);
    }

    #[test]
    fn missing_blob_is_none() {
        assert_eq!(script_blob("<html><script>var x;</script></html>", "session"), None);
        assert_eq!(script_blob("", "config"), None);
    }

    #[test]
    fn empty_blob_is_none() {
        let page = r#"<script id="session" type="application/json"></script>"#;
        assert_eq!(script_blob(page, "session"), None);
    }

    #[test]
    fn unterminated_script_is_none() {
        let page = r#"<script id="session" type="application/json">{"a":1}"#;
        assert_eq!(script_blob(page, "session"), None);
    }

    #[test]
    fn similar_ids_do_not_match() {
        let page = r#"<script id="session-extra">{"x":1}</script><script id="session">{"y":2}</script>"#;
        assert_eq!(script_blob(page, "session"), Some(r#"{"y":2}"#));
    }

    #[test]
    fn data_testid_is_not_an_id() {
        let page = r#"<script data-testid="session" id="telemetry">{"bogus":1}</script>
<script data-testid="other" id="session">{"accessToken":"BQC"}</script>"#;
        assert_eq!(script_blob(page, "session"), Some(r#"{"accessToken":"BQC"}"#));
        let only_testid = r#"<script data-testid="session">{"bogus":1}</script>"#;
        assert_eq!(script_blob(only_testid, "session"), None);
    }
}
