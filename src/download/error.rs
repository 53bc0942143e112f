//! Error types for the download module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during file downloads.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Network-level error (DNS resolution, connection refused, TLS
    /// errors, interrupted body reads).
    #[error("network error downloading {url}: {source}")]
    Network {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout downloading {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The server answered with something other than HTTP 200.
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Filesystem error while persisting a download.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The provided URL is malformed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },
}

impl DownloadError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Maps a request-phase reqwest error to the matching variant.
    pub fn from_request(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::timeout(url)
        } else {
            Self::network(url, source)
        }
    }

    /// Short category name used in failure-log labels.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Network { source, .. } => {
                if source.is_connect() {
                    "Connect"
                } else if source.is_body() || source.is_decode() {
                    "Body"
                } else {
                    "Network"
                }
            }
            Self::Timeout { .. } => "Timeout",
            Self::HttpStatus { .. } => "HttpStatus",
            Self::Io { .. } => "Io",
            Self::InvalidUrl { .. } => "InvalidUrl",
        }
    }
}

// No `From<reqwest::Error>`/`From<std::io::Error>` impls: every variant
// needs context (url, path) the source errors don't carry, so callers go
// through the constructor helpers instead.
