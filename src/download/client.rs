//! HTTP client wrapper shared by the download components.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use url::Url;

use super::constants::REQUEST_TIMEOUT;
use super::error::DownloadError;

/// HTTP client for RCSB file downloads.
///
/// Created once per run and shared across requests, so the underlying
/// reqwest connection pool is reused for every task.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Client with the standard 5-minute total request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Client with an explicit total request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// Issues a GET and verifies the response is HTTP 200.
    ///
    /// The timeout is applied per request and spans connect through body
    /// read, so callers streaming the returned response stay covered.
    ///
    /// # Errors
    ///
    /// [`DownloadError::InvalidUrl`] for unparseable URLs,
    /// [`DownloadError::Timeout`] when the deadline elapses,
    /// [`DownloadError::Network`] for transport failures, and
    /// [`DownloadError::HttpStatus`] for any non-200 answer.
    pub async fn get_checked(&self, url: &str) -> Result<Response, DownloadError> {
        Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        debug!(url, "sending GET");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DownloadError::from_request(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }
        Ok(response)
    }

    /// Fetches the full response body into memory.
    ///
    /// # Errors
    ///
    /// Same as [`get_checked`](Self::get_checked), plus body-read
    /// failures.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = self.get_checked(url).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| DownloadError::from_request(url, e))?;
        Ok(body.to_vec())
    }
}
