//! The `assemblies` subcommand: bounded-concurrency batch download.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use pdb_bootstrap::DataPaths;
use pdb_bootstrap::download::{
    ASSEMBLY_BASE_URL, BatchDownloader, BatchReport, HttpClient, plan_downloads,
};
use pdb_bootstrap::input::read_id_list;

/// Downloads the first biological assembly for every identifier in
/// `input_file` that is not already on disk, then reports the outcome
/// and persists a failure log when needed.
pub async fn run_assemblies(
    paths: &DataPaths,
    input_file: &Path,
    limit: usize,
    quiet: bool,
) -> Result<()> {
    let output_dir = paths.assemblies_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    let ids = read_id_list(input_file)
        .with_context(|| format!("reading identifier list {}", input_file.display()))?;

    let tasks = plan_downloads(&ids, ASSEMBLY_BASE_URL, &output_dir);
    if tasks.is_empty() {
        println!("All required assembly files already exist. Nothing to download.");
        return Ok(());
    }

    let total = tasks.len();
    println!("Starting download of {total} biological assemblies.");
    println!("Concurrency limit set to: {limit}");

    let bar = download_bar(total as u64, quiet);
    let tick = {
        let bar = bar.clone();
        move || bar.inc(1)
    };

    let engine = BatchDownloader::new(HttpClient::new(), limit)?;
    let outcomes = engine.run(tasks, tick).await;
    bar.finish_and_clear();

    let report = BatchReport::from_outcomes(outcomes);
    println!(
        "\nDownload complete. {}/{} files downloaded successfully.",
        report.success_count(),
        total
    );

    if report.has_failures() {
        let log_path = paths.assembly_log();
        report
            .write_failure_log(&log_path)
            .with_context(|| format!("writing failure log {}", log_path.display()))?;
        println!(
            "Found {} failed downloads. See {} for details.",
            report.failure_count(),
            log_path.display()
        );
    }

    Ok(())
}

fn download_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{msg} {wide_bar} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Downloading");
    bar
}
