//! Bounded-concurrency batch download engine.
//!
//! The engine spawns every planned task up front; a semaphore sized to
//! the configured limit is the sole admission control on simultaneous
//! in-flight requests. Each task ends in exactly one
//! [`DownloadOutcome`], and outcomes are aggregated only after every
//! task has finished.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::client::HttpClient;
use super::error::DownloadError;
use super::task::{DownloadOutcome, DownloadTask, FailureKind, TaskStatus};

/// Error type for batch engine construction.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid concurrency value provided.
    #[error("invalid concurrency limit {value}: must be at least 1")]
    InvalidConcurrency {
        /// The invalid value that was provided.
        value: usize,
    },
}

/// Executes a planned batch with a bounded number of in-flight requests.
///
/// # Concurrency Model
///
/// - Every task runs in its own Tokio task, spawned immediately
/// - Each task acquires an owned semaphore permit before touching the
///   network; the permit is released when the task finishes (RAII)
/// - Tasks write to disjoint destination files and return their own
///   result, so the only shared state is the outcome collection
///
/// # Failure Semantics
///
/// Per-task failures are converted into labeled outcomes and never abort
/// the batch. There are no retries and no partial files: the destination
/// is written only after the full body has been read.
#[derive(Debug)]
pub struct BatchDownloader {
    client: HttpClient,
    semaphore: Arc<Semaphore>,
    limit: usize,
}

impl BatchDownloader {
    /// Creates an engine capped at `limit` simultaneous requests.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConcurrency`] when `limit` is zero.
    pub fn new(client: HttpClient, limit: usize) -> Result<Self, EngineError> {
        if limit == 0 {
            return Err(EngineError::InvalidConcurrency { value: limit });
        }
        debug!(limit, "creating batch downloader");
        Ok(Self {
            client,
            semaphore: Arc::new(Semaphore::new(limit)),
            limit,
        })
    }

    /// Returns the configured concurrency limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs every task to completion and returns one outcome per task.
    ///
    /// `on_complete` fires exactly once per finished task, success and
    /// failure alike, at the moment the task completes. It drives
    /// progress display only and plays no part in outcome accounting.
    pub async fn run<F>(&self, tasks: Vec<DownloadTask>, on_complete: F) -> Vec<DownloadOutcome>
    where
        F: Fn() + Send + Sync + 'static,
    {
        info!(tasks = tasks.len(), limit = self.limit, "starting batch download");

        let on_complete = Arc::new(on_complete);
        let mut handles = Vec::with_capacity(tasks.len());

        for task in tasks {
            let client = self.client.clone();
            let semaphore = Arc::clone(&self.semaphore);
            let on_complete = Arc::clone(&on_complete);
            let url = task.url.clone();

            let handle = tokio::spawn(async move {
                // The semaphore is never closed, so acquisition cannot
                // fail; the owned permit holds the admission slot for the
                // whole request and drops when the task finishes.
                let _permit = semaphore.acquire_owned().await.ok();

                let status = match download_one(&client, &task).await {
                    Ok(()) => TaskStatus::Success,
                    Err(err) => {
                        warn!(url = %task.url, error = %err, "download failed");
                        TaskStatus::from_error(&err)
                    }
                };
                on_complete();
                DownloadOutcome {
                    url: task.url,
                    status,
                }
            });
            handles.push((url, handle));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (url, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                // A panicked task still gets a labeled outcome so the
                // batch accounting stays exact.
                Err(err) => {
                    warn!(url = %url, error = %err, "download task panicked");
                    DownloadOutcome {
                        url,
                        status: TaskStatus::Failed(FailureKind::Other("Panic".to_string())),
                    }
                }
            };
            outcomes.push(outcome);
        }

        info!(
            completed = outcomes.iter().filter(|o| o.is_success()).count(),
            total = outcomes.len(),
            "batch download complete"
        );
        outcomes
    }
}

/// Downloads one assembly file: full body read, then a single
/// open-write-close. A failed request never leaves a partial file.
async fn download_one(client: &HttpClient, task: &DownloadTask) -> Result<(), DownloadError> {
    let body = client.fetch_bytes(&task.url).await?;
    debug!(url = %task.url, bytes = body.len(), "writing assembly");
    tokio::fs::write(&task.dest, &body)
        .await
        .map_err(|e| DownloadError::io(task.dest.clone(), e))
}

/// Aggregated results of a batch run, partitioned for reporting.
#[derive(Debug)]
pub struct BatchReport {
    successes: Vec<DownloadOutcome>,
    failures: Vec<DownloadOutcome>,
}

impl BatchReport {
    /// Partitions outcomes into successes and failures.
    ///
    /// Failures are sorted by URL so the log is deterministic regardless
    /// of completion order.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<DownloadOutcome>) -> Self {
        let (successes, mut failures): (Vec<_>, Vec<_>) =
            outcomes.into_iter().partition(DownloadOutcome::is_success);
        failures.sort_by(|a, b| a.url.cmp(&b.url));
        Self {
            successes,
            failures,
        }
    }

    /// Number of tasks that downloaded their file.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    /// Number of tasks that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Total tasks accounted for.
    #[must_use]
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Whether any task failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The failed outcomes, sorted by URL.
    #[must_use]
    pub fn failures(&self) -> &[DownloadOutcome] {
        &self.failures
    }

    /// Writes one `{url}: {outcome}` line per failure.
    ///
    /// # Errors
    ///
    /// Propagates filesystem errors.
    pub fn write_failure_log(&self, path: &Path) -> std::io::Result<()> {
        let mut lines = String::new();
        for outcome in &self.failures {
            lines.push_str(&outcome.log_line());
            lines.push('\n');
        }
        std::fs::write(path, lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn outcome(url: &str, status: TaskStatus) -> DownloadOutcome {
        DownloadOutcome {
            url: url.to_string(),
            status,
        }
    }

    #[test]
    fn test_new_rejects_zero_limit() {
        let result = BatchDownloader::new(HttpClient::new(), 0);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConcurrency { value: 0 })
        ));
    }

    #[test]
    fn test_new_accepts_positive_limit() {
        let engine = BatchDownloader::new(HttpClient::new(), 100).unwrap();
        assert_eq!(engine.limit(), 100);
    }

    #[test]
    fn test_report_partitions_and_counts() {
        let report = BatchReport::from_outcomes(vec![
            outcome("https://a", TaskStatus::Success),
            outcome("https://b", TaskStatus::Failed(FailureKind::Timeout)),
            outcome("https://c", TaskStatus::Success),
        ]);

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.total(), 3);
        assert!(report.has_failures());
    }

    #[test]
    fn test_report_sorts_failures_by_url() {
        let report = BatchReport::from_outcomes(vec![
            outcome("https://z", TaskStatus::Failed(FailureKind::Timeout)),
            outcome("https://a", TaskStatus::Failed(FailureKind::HttpStatus(404))),
        ]);

        let urls: Vec<&str> = report.failures().iter().map(|o| o.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a", "https://z"]);
    }

    #[test]
    fn test_write_failure_log_one_line_per_failure() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("download_log.txt");

        let report = BatchReport::from_outcomes(vec![
            outcome("https://a", TaskStatus::Failed(FailureKind::HttpStatus(404))),
            outcome("https://b", TaskStatus::Success),
            outcome("https://c", TaskStatus::Failed(FailureKind::Timeout)),
        ]);
        report.write_failure_log(&log_path).unwrap();

        let contents = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "https://a: Failed (HTTP 404)",
                "https://c: Failed (Timeout)"
            ]
        );
    }

    #[test]
    fn test_report_without_failures() {
        let report = BatchReport::from_outcomes(vec![outcome("https://a", TaskStatus::Success)]);
        assert!(!report.has_failures());
        assert_eq!(report.failure_count(), 0);
    }
}
