use crate::common::command::{run_linediff_command, stdout_of, sync_root};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_file_without_versions(sync_root: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        sync_root.path().join("fresh.txt"),
        "never overwritten".to_string(),
    ));

    let actual_output = stdout_of(run_linediff_command(
        sync_root.path(),
        &["versions", "fresh.txt"],
    ))?;

    assert_eq!(actual_output, "No stored versions of fresh.txt\n");

    Ok(())
}
