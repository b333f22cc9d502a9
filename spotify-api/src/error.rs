//! Error types for the Spotify web-player API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Spotify API.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// A public or internal identifier could not be transcoded.
    ///
    /// Always a caller bug: the input contained characters outside the
    /// base-62 / hex alphabet, was empty, or decoded to more than 128 bits.
    #[error("invalid identifier {input:?}: {reason}")]
    InvalidIdentifier {
        /// The identifier exactly as passed in.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The server answered with a non-2xx HTTP status.
    ///
    /// Common statuses:
    /// - `401` — bearer token rejected
    /// - `404` — unknown resource
    /// - `429` — rate limited
    #[error("{context} failed with HTTP {status}{}", message_suffix(.message))]
    RemoteRequestFailed {
        /// HTTP status code.
        status: u16,
        /// Provider error message, or a trimmed snippet of the body.
        message: Option<String>,
        /// `"<METHOD> <url>"` of the failed call.
        context: String,
    },

    /// The landing page did not contain a usable `session` or `config` blob.
    ///
    /// There is no fallback authentication path, so this is fatal for the
    /// client that raised it.
    #[error("authentication bootstrap failed: {0}")]
    AuthenticationBootstrapFailed(String),

    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response body was not the JSON we expected.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The cookie file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the cookie file is not in Netscape `cookies.txt` format.
    #[error("cookie file line {line}: {reason}")]
    CookieFile {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A configured URL or header value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SpotifyError {
    /// HTTP status of a [`RemoteRequestFailed`](Self::RemoteRequestFailed),
    /// `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Convenience alias for `Result<T, SpotifyError>`.
pub type Result<T> = std::result::Result<T, SpotifyError>;
