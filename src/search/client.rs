//! Paginated fetch loop against the Search API.

use std::collections::BTreeSet;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::query::{SearchRequest, SearchResponse};

/// Default RCSB Search API endpoint.
pub const SEARCH_URL: &str = "https://search.rcsb.org/rcsbsearch/v2/query";

/// Errors that can occur while querying the search endpoint.
///
/// A non-200 response is NOT an error: the fetch loop exits early and
/// surfaces whatever was accumulated so far.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure or an undecodable response body.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the paginated entry search.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    /// Client against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(SEARCH_URL)
    }

    /// Client against a custom endpoint (wiremock in tests).
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches the complete identifier set, one page at a time.
    ///
    /// The first response fixes the server-reported total; the offset
    /// advances by each page's deduplicated identifier count until it
    /// reaches that total. An empty page stops the loop early so a
    /// misreported total cannot spin forever. Identifiers accumulate in
    /// a `BTreeSet`, deduplicating across pages and yielding
    /// lexicographic order for free.
    ///
    /// `on_page` observes `(identifiers so far, server-reported total)`
    /// after each page; it drives progress display only.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Request`] when a request cannot be sent or
    /// a 200 response body cannot be decoded. A non-200 status instead
    /// ends the loop and returns the partial set.
    pub async fn fetch_entry_ids<F>(&self, mut on_page: F) -> Result<BTreeSet<String>, SearchError>
    where
        F: FnMut(usize, usize),
    {
        let mut ids = BTreeSet::new();
        let mut start = 0usize;
        let mut total_count: Option<usize> = None;

        loop {
            if let Some(total) = total_count {
                if start >= total {
                    break;
                }
            }

            let request = SearchRequest::entry_query(start);
            let response = self
                .client
                .post(&self.endpoint)
                .json(&request)
                .send()
                .await?;

            let status = response.status();
            if status != StatusCode::OK {
                let body = response.text().await.unwrap_or_default();
                warn!(
                    status = status.as_u16(),
                    body = %body,
                    "search endpoint returned an error; keeping partial results"
                );
                break;
            }

            let page: SearchResponse = response.json().await?;
            let total = *total_count.get_or_insert(page.total_count);

            if page.result_set.is_empty() {
                // Guards against an infinite loop when the server
                // misreports the total.
                break;
            }

            let page_ids: BTreeSet<String> = page
                .result_set
                .into_iter()
                .map(|hit| hit.identifier)
                .collect();
            start += page_ids.len();
            ids.extend(page_ids);

            debug!(start, total, collected = ids.len(), "search page processed");
            on_page(ids.len(), total);
        }

        info!(collected = ids.len(), "entry search complete");
        Ok(ids)
    }
}
