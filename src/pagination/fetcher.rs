//! Page traversal implementation
//!
//! Follows server-driven `next` links one page at a time, delivering each
//! page to the consumer before the next request is issued.

use super::types::{Page, PageBody};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fetches every page of a paginated resource in server order
pub struct PageFetcher {
    http: Arc<HttpClient>,
}

impl PageFetcher {
    /// Create a fetcher over the given transport
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetch all pages starting from `start_url`, delivering each to
    /// `on_page` in arrival order.
    ///
    /// Pages are fetched strictly one at a time; each request is issued only
    /// after the previous page's callback has returned, so a consumer
    /// building an incrementally rendered list always appends. The
    /// server-supplied `next` reference is followed verbatim.
    ///
    /// Any fetch failure calls `on_error` exactly once and stops the
    /// traversal; pages already delivered are not retracted. Partial
    /// delivery is an accepted outcome, not a transactional failure.
    ///
    /// There is no separate completion callback: for awaiting callers the
    /// future resolving after the last `on_page` call is the completion
    /// signal, and an error traversal ends with `on_error` as its final
    /// callback. Detached callers (`tokio::spawn`) must infer completion
    /// from the absence of further calls.
    ///
    /// Cancellation is not supported mid-traversal; a caller wanting early
    /// termination drops the future or ignores further callbacks.
    ///
    /// Traversal state is local to this call: invoking `fetch_all` twice
    /// against identical server state yields two independent, identically
    /// ordered callback sequences.
    pub async fn fetch_all<T, P, E>(&self, start_url: &str, mut on_page: P, on_error: E)
    where
        T: DeserializeOwned,
        P: FnMut(Page<T>),
        E: FnOnce(Error),
    {
        let mut url = start_url.to_string();
        let mut page_number = 1u32;

        loop {
            match self.fetch_page::<T>(&url).await {
                Ok(page) => {
                    debug!("Page {page_number}: fetched {} items", page.len());
                    let next = page.next.clone();
                    on_page(page);
                    match next {
                        Some(next_url) => {
                            url = next_url;
                            page_number += 1;
                        }
                        None => return,
                    }
                }
                Err(err) => {
                    warn!("Page fetch failed on page {page_number}: {err}");
                    on_error(err);
                    return;
                }
            }
        }
    }

    /// Fetch and decode a single page.
    ///
    /// A response without an `items` sequence is a malformed page, not an
    /// empty one.
    pub async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>> {
        let response = self.http.get(url).await?;
        let body_text = response.text().await.map_err(Error::Http)?;
        let body: PageBody<T> = serde_json::from_str(&body_text)?;

        let items = body
            .items
            .ok_or_else(|| Error::malformed_page("response has no 'items' sequence"))?;

        Ok(Page {
            items,
            next: body.next,
        })
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher").finish_non_exhaustive()
    }
}
