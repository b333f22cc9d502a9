//! Netscape `cookies.txt` reader.
//!
//! Browser export extensions write one cookie per line with seven
//! tab-separated fields:
//!
//! ```text
//! .spotify.com	TRUE	/	TRUE	1767225600	sp_dc	AQB...
//! domain       	sub 	path	secure	expires	name	value
//! ```
//!
//! Lines starting with `#` are comments, except for the `#HttpOnly_` prefix
//! that marks an http-only cookie. Expired and session cookies are kept:
//! the web player decides what is still valid.
//!
//! Exporters disagree on the details, so the flag columns count as set only
//! for `TRUE` (any case) and anything else reads as unset, and a fractional
//! expiry is truncated to whole seconds. Only a wrong field count or a
//! non-numeric expiry is rejected.

use crate::error::{Result, SpotifyError};
use reqwest::Url;
use reqwest::cookie::Jar;
use std::fs;
use std::path::Path;

const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// One cookie as stored in the jar file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub domain: String,
    pub include_subdomains: bool,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
    /// Unix seconds, `0` for session cookies.
    pub expires: i64,
    pub name: String,
    pub value: String,
}

impl Cookie {
    /// `Set-Cookie` form used to seed a [`Jar`].
    ///
    /// Expiry is left out so the jar keeps the cookie for the whole run.
    fn set_cookie_header(&self) -> String {
        let mut header = format!("{}={}; Path={}", self.name, self.value, self.path);
        if self.include_subdomains {
            header.push_str("; Domain=");
            header.push_str(self.domain.trim_start_matches('.'));
        }
        if self.secure {
            header.push_str("; Secure");
        }
        if self.http_only {
            header.push_str("; HttpOnly");
        }
        header
    }

    fn origin(&self) -> Result<Url> {
        let host = self.domain.trim_start_matches('.');
        Url::parse(&format!("https://{host}{}", self.path))
            .map_err(|e| SpotifyError::InvalidConfig(format!("cookie domain {host:?}: {e}")))
    }
}

/// Read every cookie from a Netscape-format file, in file order.
pub fn load(path: &Path) -> Result<Vec<Cookie>> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parse the contents of a Netscape-format cookie file.
pub fn parse(text: &str) -> Result<Vec<Cookie>> {
    let mut cookies = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        let (line, http_only) = match line.strip_prefix(HTTP_ONLY_PREFIX) {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let &[domain, sub, path, secure, expires, name, value] = fields.as_slice() else {
            return Err(SpotifyError::CookieFile {
                line: idx + 1,
                reason: format!("expected 7 tab-separated fields, found {}", fields.len()),
            });
        };
        let expires = parse_expiry(expires).ok_or_else(|| SpotifyError::CookieFile {
            line: idx + 1,
            reason: format!("bad expiry {expires:?}"),
        })?;

        cookies.push(Cookie {
            domain: domain.to_owned(),
            include_subdomains: parse_flag(sub),
            path: path.to_owned(),
            secure: parse_flag(secure),
            http_only,
            expires,
            name: name.to_owned(),
            value: value.to_owned(),
        });
    }
    Ok(cookies)
}

/// Build a jar pre-filled with `cookies`.
pub fn jar(cookies: &[Cookie]) -> Result<Jar> {
    let jar = Jar::default();
    for cookie in cookies {
        jar.add_cookie_str(&cookie.set_cookie_header(), &cookie.origin()?);
    }
    Ok(jar)
}

fn parse_flag(field: &str) -> bool {
    field.trim().eq_ignore_ascii_case("TRUE")
}

/// Unix seconds; empty means a session cookie.
#[allow(clippy::cast_possible_truncation)]
fn parse_expiry(field: &str) -> Option<i64> {
    let field = field.trim();
    if field.is_empty() {
        return Some(0);
    }
    if let Ok(secs) = field.parse::<i64>() {
        return Some(secs);
    }
    let secs = field.parse::<f64>().ok().filter(|secs| secs.is_finite())?;
    Some(secs.trunc() as i64)
}
