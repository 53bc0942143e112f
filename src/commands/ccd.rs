//! The `ccd` subcommand: Chemical Component Dictionary fetch.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

use pdb_bootstrap::DataPaths;
use pdb_bootstrap::download::{CCD_URL, HttpClient, fetch_dictionary};

/// Streams the full dictionary archive to disk with byte-level progress.
///
/// A failed download is reported to the operator but does not propagate:
/// the command returns normally either way, matching the batch
/// downloader's exit-code behavior.
pub async fn run_ccd(paths: &DataPaths, quiet: bool) -> Result<()> {
    let output_dir = paths.ccd_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let dest = paths.ccd_file();

    println!("Downloading Chemical Component Dictionary from:\n  {CCD_URL}");
    println!("Saving to: {}", dest.display());

    let bar = byte_bar(quiet);
    let client = HttpClient::new();
    let result = fetch_dictionary(&client, CCD_URL, &dest, |downloaded, total| {
        if bar.length() != Some(total) {
            bar.set_length(total);
        }
        bar.set_position(downloaded);
    })
    .await;
    bar.finish_and_clear();

    match result {
        Ok(bytes) => {
            println!("\nSUCCESS! CCD downloaded successfully ({bytes} bytes).");
        }
        Err(err) => {
            error!(error = %err, "dictionary download failed");
            println!("\nFAILED! An error occurred during download: {err}");
        }
    }
    Ok(())
}

fn byte_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::no_length();
    bar.set_style(
        ProgressStyle::with_template("  -> Progress: {bytes} / {total_bytes}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
