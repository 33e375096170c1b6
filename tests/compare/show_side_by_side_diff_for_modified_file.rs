use crate::common::command::{run_linediff_command, stdout_of, sync_root};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_side_by_side_diff_for_modified_file(
    sync_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        sync_root.path().join("old.txt"),
        "alpha\nbeta\ngamma".to_string(),
    ));
    write_file(FileSpec::new(
        sync_root.path().join("new.txt"),
        "alpha\nBETA\ngamma".to_string(),
    ));

    let actual_output = stdout_of(run_linediff_command(
        sync_root.path(),
        &["compare", "old.txt", "new.txt"],
    ))?;

    let expected_output = "--- old.txt\n\
                           +++ new.txt\n\
                           +1 -1\n\
                           1 1   alpha\n\
                           2   - beta\n  \
                           2 + BETA\n\
                           3 3   gamma\n";

    assert_eq!(actual_output, expected_output);

    Ok(())
}
