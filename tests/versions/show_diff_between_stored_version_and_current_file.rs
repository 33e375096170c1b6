use crate::common::command::{run_linediff_command, stdout_of, versioned_sync_root};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_diff_between_stored_version_and_current_file(
    versioned_sync_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(run_linediff_command(
        versioned_sync_root.path(),
        &["version-diff", "notes.txt", "1"],
    ))?;

    let expected_output = "--- notes.txt (version 1)\n\
                           +++ notes.txt\n\
                           +3 -1\n\
                           1 1   alpha\n\
                           2   - beta\n  \
                           2 + BETA\n  \
                           3 + gamma\n  \
                           4 + delta\n";

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn resolve_root_from_flag_and_leading_slash(
    versioned_sync_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = versioned_sync_root.path().display().to_string();
    let elsewhere = TempDir::new()?;

    let actual_output = stdout_of(run_linediff_command(
        elsewhere.path(),
        &["--root", &root, "version-diff", "--stat", "/notes.txt", "2"],
    ))?;

    assert_eq!(
        actual_output,
        "--- /notes.txt (version 2)\n+++ /notes.txt\n+2 -1\n"
    );

    Ok(())
}
