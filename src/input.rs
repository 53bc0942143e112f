//! Identifier-list parsing for the batch downloader.

use std::io;
use std::path::Path;

/// Reads a newline-delimited PDB identifier list.
///
/// Blank lines are skipped and identifiers are normalized to uppercase.
/// Duplicates are kept as-is; deduplication is the ID fetcher's job.
///
/// # Errors
///
/// Propagates filesystem errors, including `NotFound` when the list does
/// not exist.
pub fn read_id_list(path: &Path) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect())
}
