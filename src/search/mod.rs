//! RCSB Search API client.
//!
//! Builds the fixed entry query (release-date cutoff ANDed with a
//! resolution ceiling) and walks the paginated result set, accumulating
//! a deduplicated identifier set.

mod client;
mod query;

pub use client::{SEARCH_URL, SearchClient, SearchError};
pub use query::{
    MAX_RESOLUTION, PAGE_ROWS, RELEASE_DATE_CUTOFF, SearchRequest, SearchResponse,
};
