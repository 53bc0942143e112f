//! The `fetch-ids` subcommand: paginated entry search.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use pdb_bootstrap::search::SearchClient;

/// Queries the Search API for every matching entry identifier and writes
/// the sorted, deduplicated set to `output`, one per line.
pub async fn run_fetch_ids(output: &Path, quiet: bool) -> Result<()> {
    println!("Starting PDB ID fetch...");

    let bar = fetch_bar(quiet);
    let client = SearchClient::new();
    let ids = client
        .fetch_entry_ids(|collected, total| {
            bar.set_length(total as u64);
            bar.set_position(collected as u64);
        })
        .await?;
    bar.finish_and_clear();

    if ids.is_empty() {
        println!("No PDB IDs were fetched. Check the query and your connection.");
        return Ok(());
    }

    let mut file = std::fs::File::create(output)
        .with_context(|| format!("creating {}", output.display()))?;
    for id in &ids {
        writeln!(file, "{id}")?;
    }

    println!(
        "\nSuccessfully fetched {} PDB IDs and saved to {}",
        ids.len(),
        output.display()
    );
    Ok(())
}

fn fetch_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::no_length();
    bar.set_style(
        ProgressStyle::with_template("{msg} {wide_bar} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Fetching PDB IDs");
    bar
}
