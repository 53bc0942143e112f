//! HTTP download components.
//!
//! Two shapes of download live here: the bounded-concurrency batch engine
//! for per-entry assembly files ([`BatchDownloader`]) and the streaming
//! single-file fetch for the Chemical Component Dictionary
//! ([`fetch_dictionary`]).

mod client;
mod constants;
mod dictionary;
mod engine;
mod error;
mod task;

pub use client::HttpClient;
pub use constants::{ASSEMBLY_BASE_URL, CCD_URL, DEFAULT_CONCURRENCY, REQUEST_TIMEOUT};
pub use dictionary::fetch_dictionary;
pub use engine::{BatchDownloader, BatchReport, EngineError};
pub use error::DownloadError;
pub use task::{DownloadOutcome, DownloadTask, FailureKind, TaskStatus, plan_downloads};
