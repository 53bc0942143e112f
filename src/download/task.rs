//! Task planning and per-task outcomes for the batch downloader.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DownloadError;

/// One planned download: a source URL paired with its destination path.
///
/// Tasks exist only for the duration of one run; they are derived
/// deterministically from entry identifiers and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    /// Full download URL.
    pub url: String,
    /// Destination file path.
    pub dest: PathBuf,
}

impl DownloadTask {
    /// Builds the task for one entry identifier against `base_url`.
    #[must_use]
    pub fn for_entry(id: &str, base_url: &str, output_dir: &Path) -> Self {
        let file_name = assembly_file_name(id);
        Self {
            url: format!("{base_url}{file_name}"),
            dest: output_dir.join(file_name),
        }
    }
}

/// Filename of the first biological assembly for an entry.
#[must_use]
pub fn assembly_file_name(id: &str) -> String {
    format!("{}-assembly1.cif.gz", id.to_lowercase())
}

/// Plans the tasks for a run: one per identifier whose destination file
/// does not already exist.
///
/// The skip is a presence check only, so re-runs never re-download files
/// that are already on disk.
#[must_use]
pub fn plan_downloads(ids: &[String], base_url: &str, output_dir: &Path) -> Vec<DownloadTask> {
    ids.iter()
        .map(|id| DownloadTask::for_entry(id, base_url, output_dir))
        .filter(|task| {
            let present = task.dest.exists();
            if present {
                debug!(path = %task.dest.display(), "destination present, skipping");
            }
            !present
        })
        .collect()
}

/// Why a task failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The server answered with a non-200 status.
    HttpStatus(u16),
    /// The request exceeded the per-task timeout.
    Timeout,
    /// Anything else, labeled by error category.
    Other(String),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(status) => write!(f, "HTTP {status}"),
            Self::Timeout => f.write_str("Timeout"),
            Self::Other(category) => f.write_str(category),
        }
    }
}

/// Terminal classification of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// The assembly file was downloaded and written.
    Success,
    /// The task failed; no file was written.
    Failed(FailureKind),
}

impl TaskStatus {
    pub(crate) fn from_error(err: &DownloadError) -> Self {
        Self::Failed(match err {
            DownloadError::HttpStatus { status, .. } => FailureKind::HttpStatus(*status),
            DownloadError::Timeout { .. } => FailureKind::Timeout,
            other => FailureKind::Other(other.category().to_string()),
        })
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failed(kind) => write!(f, "Failed ({kind})"),
        }
    }
}

/// Result of one completed task. Every spawned task yields exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// The source URL the task targeted.
    pub url: String,
    /// How the task ended.
    pub status: TaskStatus,
}

impl DownloadOutcome {
    /// Whether the task downloaded its file.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, TaskStatus::Success)
    }

    /// Failure-log line: `{url}: {outcome}`.
    #[must_use]
    pub fn log_line(&self) -> String {
        format!("{}: {}", self.url, self.status)
    }
}
