use crate::common::command::{conflicted_sync_root, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_diff_for_conflict_copy_without_original(
    conflicted_sync_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(run_linediff_command(
        conflicted_sync_root.path(),
        &[
            "conflict-diff",
            "--format",
            "unified",
            "captions (conflict 2026-02-18).txt",
        ],
    ))?;

    assert_eq!(
        actual_output,
        "--- /dev/null\n+++ captions (conflict 2026-02-18).txt\n+1 -0\n+sunset over the bay\n"
    );

    Ok(())
}
