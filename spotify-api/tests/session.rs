mod common;

use common::{FAR_FUTURE_MS, LONG_AGO_MS, TOKEN, client, config, mock_json, mock_landing};
use spotify_api::{SpotifyClient, SpotifyError};
use std::io::Write;

#[test]
fn bootstrap_installs_token_and_config() {
    let mut server = mockito::Server::new();
    let landing = mock_landing(&mut server, FAR_FUTURE_MS, 1);

    let client = client(&server);
    let info = client.session().session_info();
    assert_eq!(info.access_token, TOKEN);
    assert_eq!(info.access_token_expiration_timestamp_ms, FAR_FUTURE_MS);
    assert_eq!(info.client_id.as_deref(), Some("test-client"));
    assert_eq!(client.config_info()["appName"], "web-player");
    assert!(!client.session().is_expired());
    landing.assert();
}

#[test]
fn unexpired_token_is_not_renewed() {
    let mut server = mockito::Server::new();
    let landing = mock_landing(&mut server, FAR_FUTURE_MS, 1);
    let track = mock_json(&mut server, "/v1/tracks/t1", r#"{"id":"t1"}"#, 2);

    let mut client = client(&server);
    client.get_track("t1").unwrap();
    client.get_track("t1").unwrap();

    landing.assert();
    track.assert();
}

#[test]
fn expired_token_is_renewed_once_before_the_call() {
    let mut server = mockito::Server::new();
    // construction + one renewal
    let landing = mock_landing(&mut server, LONG_AGO_MS, 2);
    let track = mock_json(&mut server, "/v1/tracks/t1", r#"{"id":"t1","name":"Song"}"#, 1);

    let mut client = client(&server);
    assert!(client.session().is_expired());
    let value = client.get_track("t1").unwrap();
    assert_eq!(value["name"], "Song");

    landing.assert();
    track.assert();
}

#[test]
fn explicit_ensure_valid_is_a_no_op_when_fresh() {
    let mut server = mockito::Server::new();
    let landing = mock_landing(&mut server, FAR_FUTURE_MS, 1);

    let mut client = client(&server);
    client.ensure_valid().unwrap();
    client.ensure_valid().unwrap();
    landing.assert();
}

#[test]
fn landing_page_without_session_blob_fails_bootstrap() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(r#"<html><script id="config" type="application/json">{}</script></html>"#)
        .create();

    let err = SpotifyClient::with_config(config(&server)).err().unwrap();
    assert!(matches!(err, SpotifyError::AuthenticationBootstrapFailed(_)), "{err}");
}

#[test]
fn landing_page_without_config_blob_fails_bootstrap() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(format!(
            r#"<script id="session" type="application/json">{{"accessToken":"x","accessTokenExpirationTimestampMs":{FAR_FUTURE_MS}}}</script>"#
        ))
        .create();

    let err = SpotifyClient::with_config(config(&server)).err().unwrap();
    assert!(matches!(err, SpotifyError::AuthenticationBootstrapFailed(_)), "{err}");
}

#[test]
fn landing_page_error_status_is_surfaced() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/").with_status(503).with_body("maintenance").create();

    let err = SpotifyClient::with_config(config(&server)).err().unwrap();
    match err {
        SpotifyError::RemoteRequestFailed {
            status,
            message,
            context,
        } => {
            assert_eq!(status, 503);
            assert_eq!(message.as_deref(), Some("maintenance"));
            assert!(context.starts_with("GET "));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_renewal_propagates() {
    let mut server = mockito::Server::new();
    let landing = mock_landing(&mut server, LONG_AGO_MS, 1);
    let mut client = client(&server);
    landing.remove();
    let _mock = server.mock("GET", "/").with_status(500).create();
    let track = mock_json(&mut server, "/v1/tracks/t1", "{}", 0);

    let err = client.get_track("t1").unwrap_err();
    assert_eq!(err.status(), Some(500));
    track.assert();
}

#[test]
fn missing_cookie_file_is_an_io_error() {
    let mut server = mockito::Server::new();
    let landing = mock_landing(&mut server, FAR_FUTURE_MS, 0);

    let config = config(&server).with_cookies_path("/nonexistent/cookies.txt");
    let err = SpotifyClient::with_config(config).err().unwrap();
    assert!(matches!(err, SpotifyError::Io(_)), "{err}");
    landing.assert();
}

#[test]
fn cookie_file_is_loaded_before_bootstrap() {
    let mut server = mockito::Server::new();
    let landing = mock_landing(&mut server, FAR_FUTURE_MS, 1);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# Netscape HTTP Cookie File").unwrap();
    writeln!(file, ".spotify.com\tTRUE\t/\tTRUE\t0\tsp_dc\tsecret").unwrap();

    let config = config(&server).with_cookies_path(file.path());
    SpotifyClient::with_config(config).unwrap();
    landing.assert();
}

#[test]
fn malformed_cookie_file_is_rejected() {
    let server = mockito::Server::new();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not a cookie line").unwrap();

    let config = config(&server).with_cookies_path(file.path());
    let err = SpotifyClient::with_config(config).err().unwrap();
    assert!(matches!(err, SpotifyError::CookieFile { line: 1, .. }), "{err}");
}
