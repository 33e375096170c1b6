use crate::common::command::{conflicted_sync_root, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_conflict_copies(conflicted_sync_root: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(run_linediff_command(
        conflicted_sync_root.path(),
        &["conflicts"],
    ))?;

    assert_eq!(
        actual_output,
        "2026-02-18  captions (conflict 2026-02-18).txt  captions.txt (missing)\n\
         2026-02-19  docs/plan (conflict 2026-02-19).md  docs/plan.md\n"
    );

    Ok(())
}
