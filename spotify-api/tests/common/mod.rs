//! Shared helpers for the mock-server tests.

#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use spotify_api::{ApiConfig, SpotifyClient};
use std::time::Duration;

pub const TOKEN: &str = "BQC-test-token";

/// Expiry far in the future (2100-01-01).
pub const FAR_FUTURE_MS: i64 = 4_102_444_800_000;
/// Expiry that has already passed.
pub const LONG_AGO_MS: i64 = 1_000;

/// Landing page HTML carrying a session and a config blob.
pub fn landing_page(token: &str, expires_ms: i64) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<script id="session" data-testid="session" type="application/json">{{"accessToken":"{token}","accessTokenExpirationTimestampMs":{expires_ms},"isAnonymous":true,"clientId":"test-client"}}</script>
<script id="config" data-testid="config" type="application/json">{{"appName":"web-player","market":"US"}}</script>
</head><body></body></html>"#
    )
}

/// Serve the landing page, expecting exactly `hits` bootstraps.
pub fn mock_landing(server: &mut ServerGuard, expires_ms: i64, hits: usize) -> Mock {
    server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(landing_page(TOKEN, expires_ms))
        .expect(hits)
        .create()
}

/// Serve `body` as JSON on `GET path`, expecting exactly `hits` requests.
pub fn mock_json(server: &mut ServerGuard, path: &str, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create()
}

pub fn config(server: &ServerGuard) -> ApiConfig {
    ApiConfig::default()
        .with_base_url(&server.url())
        .with_page_delay(Duration::ZERO)
}

pub fn client(server: &ServerGuard) -> SpotifyClient {
    SpotifyClient::with_config(config(server)).unwrap()
}
