use crate::common::command::{run_linediff_command, versioned_sync_root};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_for_zero_version(versioned_sync_root: TempDir) {
    run_linediff_command(
        versioned_sync_root.path(),
        &["version-diff", "notes.txt", "0"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid version number: 0"));
}

#[rstest]
fn fail_for_non_numeric_version(versioned_sync_root: TempDir) {
    run_linediff_command(
        versioned_sync_root.path(),
        &["version-diff", "notes.txt", "latest"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid value 'latest'"));
}
