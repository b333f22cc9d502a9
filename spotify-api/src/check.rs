//! Status classification applied to every response.
//!
//! Success responses are handed back untouched. Anything outside `2xx`
//! becomes [`SpotifyError::RemoteRequestFailed`] carrying the status, the
//! provider's message when the body has one, and the request that failed.
//!
//! Error bodies come in two shapes:
//!
//! ```json
//! { "error": { "status": 404, "message": "non existing id" } }
//! { "error": "invalid_token", "error_description": "..." }
//! ```

use crate::error::{Result, SpotifyError};
use reqwest::blocking::Response;
use serde_json::Value;

/// Longest body excerpt kept when the body is not a JSON error.
const SNIPPET_LEN: usize = 200;

/// Pass `response` through if its status is `2xx`.
///
/// `context` identifies the call, e.g. `"GET https://api.spotify.com/v1/tracks/..."`.
pub fn check(response: Response, context: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // The body is only for the error message; a read failure must not mask the status.
    let body = response.text().unwrap_or_default();
    Err(SpotifyError::RemoteRequestFailed {
        status: status.as_u16(),
        message: provider_message(&body),
        context: context.to_owned(),
    })
}

/// Extract the human-readable part of an error body.
fn provider_message(body: &str) -> Option<String> {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let error = &json["error"];
        let message = error["message"]
            .as_str()
            .or_else(|| json["error_description"].as_str())
            .or_else(|| error.as_str());
        if let Some(message) = message {
            return Some(message.to_owned());
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(SNIPPET_LEN).collect())
}
