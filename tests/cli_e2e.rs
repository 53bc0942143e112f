//! End-to-end CLI tests for the pdb-bootstrap binary.
//!
//! Everything here runs offline; network scenarios live in
//! `live_network.rs` behind `--ignored`.

// `Command::cargo_bin` is deprecated in assert_cmd >=2.0.17 in favor of
// `cargo::cargo_bin_cmd!` macro. Suppressed until migration to the new API.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("pdb-bootstrap").expect("binary builds")
}

/// Creates a data root with the assemblies directory pre-populated.
fn seed_assembly(root: &TempDir, file_name: &str) {
    let dir = root.path().join("data/pdb/raw/assemblies");
    std::fs::create_dir_all(&dir).expect("create assemblies dir");
    std::fs::write(dir.join(file_name), b"cif bytes").expect("seed file");
}

fn write_input(root: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = root.path().join("pdb_ids.txt");
    std::fs::write(&path, contents).expect("write input");
    path
}

#[test]
fn test_hello_greets_default_user() {
    bin()
        .arg("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, User!"));
}

#[test]
fn test_hello_greets_named_user() {
    bin()
        .args(["hello", "--name", "Rosalind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Rosalind!"));
}

#[test]
fn test_help_lists_subcommands() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hello")
                .and(predicate::str::contains("fetch-ids"))
                .and(predicate::str::contains("assemblies"))
                .and(predicate::str::contains("ccd")),
        );
}

#[test]
fn test_no_subcommand_shows_usage_error() {
    bin().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_assemblies_with_all_files_present_downloads_nothing() {
    let root = TempDir::new().expect("temp dir");
    seed_assembly(&root, "4hhb-assembly1.cif.gz");
    let input = write_input(&root, "4HHB\n");

    bin()
        .args(["assemblies", "-f"])
        .arg(&input)
        .arg("--data-dir")
        .arg(root.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All required assembly files already exist. Nothing to download.",
        ));
}

#[test]
fn test_assemblies_with_blank_input_is_a_noop() {
    let root = TempDir::new().expect("temp dir");
    let input = write_input(&root, "\n   \n");

    bin()
        .args(["assemblies", "-f"])
        .arg(&input)
        .arg("--data-dir")
        .arg(root.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to download"));
}

#[test]
fn test_assemblies_missing_input_file_fails() {
    let root = TempDir::new().expect("temp dir");

    bin()
        .args(["assemblies", "-f", "does-not-exist.txt"])
        .arg("--data-dir")
        .arg(root.path())
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading identifier list"));
}

#[test]
fn test_assemblies_rejects_zero_limit() {
    bin()
        .args(["assemblies", "-f", "ids.txt", "--limit", "0"])
        .assert()
        .failure();
}

#[test]
fn test_assemblies_without_marker_or_data_dir_fails() {
    let root = TempDir::new().expect("temp dir");
    let input = write_input(&root, "4HHB\n");

    bin()
        .current_dir(root.path())
        .args(["assemblies", "-f"])
        .arg(&input)
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("project root"));
}

#[test]
fn test_version_flag_reports_name() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdb-bootstrap"));
}
