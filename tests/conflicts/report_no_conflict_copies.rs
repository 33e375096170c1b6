use crate::common::command::{run_linediff_command, stdout_of, sync_root};
use crate::common::file::{FileSpec, write_file, write_version};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_no_conflict_copies(sync_root: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        sync_root.path().join("plain.txt"),
        "content".to_string(),
    ));
    // stored versions are never reported as conflicts
    write_version(sync_root.path(), "old (conflict 2026-01-01).txt", 1, "stored");

    let actual_output = stdout_of(run_linediff_command(sync_root.path(), &["conflicts"]))?;

    assert_eq!(actual_output, "No conflict copies found\n");

    Ok(())
}
