//! Lazy walk over `next` links of a paginated collection.
//!
//! Web API collections embed their first page and point at the rest:
//!
//! ```json
//! "tracks": { "items": [...], "next": "https://api.spotify.com/v1/albums/x/tracks?offset=50&limit=50" }
//! ```
//!
//! [`Pages`] fetches one continuation page per [`Iterator::next`] call and
//! sleeps for the configured delay before every fetch after the first, so the
//! caller decides how far to go simply by how long it keeps pulling.

use crate::error::Result;
use crate::session::Session;
use crate::types::CollectionPage;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Iterator over the continuation pages of one collection.
///
/// Finite and forward-only. The first failed page is yielded as `Err` and
/// ends the iteration; no page is retried or skipped.
pub struct Pages<'a> {
    session: &'a mut Session,
    next: Option<String>,
    delay: Duration,
    fetched: usize,
}

impl<'a> Pages<'a> {
    /// Start from the `next` URL of an already fetched page.
    pub fn new(session: &'a mut Session, next: Option<String>, delay: Duration) -> Self {
        Self {
            session,
            next,
            delay,
            fetched: 0,
        }
    }

    /// Drain the remaining pages into one item list, in page order.
    pub fn collect_items(self) -> Result<Vec<serde_json::Value>> {
        let mut items = Vec::new();
        for page in self {
            items.extend(page?.items);
        }
        Ok(items)
    }

    fn fetch(&mut self, url: &str) -> Result<CollectionPage> {
        if self.fetched > 0 && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.fetched += 1;
        debug!(url, page = self.fetched, "fetching collection page");
        let page: CollectionPage = self.session.get(url)?.json()?;
        Ok(page)
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<CollectionPage>;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.next.take()?;
        match self.fetch(&url) {
            Ok(page) => {
                self.next.clone_from(&page.next);
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::iter::FusedIterator for Pages<'_> {}
